use serde::{Deserialize, Serialize};

/// Column order the classifier was trained with.
pub const FEATURE_NAMES: [&str; 6] = [
    "designation",
    "resource_allocation",
    "mental_fatigue",
    "company_type",
    "wfh_setup",
    "gender",
];

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanyType {
    #[default]
    Service = 0,
    Product = 1,
    Other = 2,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum WfhSetup {
    #[default]
    No = 0,
    Yes = 1,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male = 0,
    Female = 1,
    Other = 2,
}

impl CompanyType {
    pub const ALL: [CompanyType; 3] = [CompanyType::Service, CompanyType::Product, CompanyType::Other];

    pub fn label(self) -> &'static str {
        match self {
            CompanyType::Service => "Service",
            CompanyType::Product => "Product",
            CompanyType::Other => "Other",
        }
    }
}

impl WfhSetup {
    pub const ALL: [WfhSetup; 2] = [WfhSetup::No, WfhSetup::Yes];

    pub fn label(self) -> &'static str {
        match self {
            WfhSetup::No => "No",
            WfhSetup::Yes => "Yes",
        }
    }
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// One interaction's worth of employee attributes, already inside their domains.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct PredictionRequest {
    pub designation: u8,
    pub resource_allocation: f32,
    pub mental_fatigue: f32,
    pub company_type: CompanyType,
    pub wfh_setup: WfhSetup,
    pub gender: Gender,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        PredictionRequest {
            designation: 2,
            resource_allocation: 0.5,
            mental_fatigue: 5.0,
            company_type: CompanyType::Service,
            wfh_setup: WfhSetup::No,
            gender: Gender::Male,
        }
    }
}

impl PredictionRequest {
    /// Feature vector in `FEATURE_NAMES` order.
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.designation as f32,
            self.resource_allocation,
            self.mental_fatigue,
            self.company_type as u8 as f32,
            self.wfh_setup as u8 as f32,
            self.gender as u8 as f32,
        ]
    }
}

/// Raw body posted by the page. Anything missing falls back to the form default.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct FormInput {
    pub designation: Option<f64>,
    pub resource_allocation: Option<f64>,
    pub mental_fatigue: Option<f64>,
    pub company_type: Option<i64>,
    pub wfh_setup: Option<i64>,
    pub gender: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: String,
    pub execution_time_ms: Option<u64>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
            execution_time_ms: None,
        }
    }

    pub fn error(message: &str) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
            execution_time_ms: None,
        }
    }

    pub fn timed(mut self, start: std::time::Instant) -> Self {
        self.execution_time_ms = Some(start.elapsed().as_millis() as u64);
        self
    }
}
