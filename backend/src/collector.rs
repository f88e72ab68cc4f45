//! Form side of the page: what the six controls look like and how a posted
//! form becomes a `PredictionRequest`.
//!
//! Every field is clamped into its domain, so collection cannot fail.

use serde::Serialize;

use crate::models::{CompanyType, FormInput, Gender, PredictionRequest, WfhSetup};

pub const PAGE_TITLE: &str = "Employee Burnout Prediction";
pub const PAGE_SUBTITLE: &str = "Enter the following details to predict employee burnout level";
pub const TRIGGER_LABEL: &str = "Predict Burnout Level";

const DESIGNATION_RANGE: (f64, f64) = (0.0, 5.0);
const RESOURCE_RANGE: (f64, f64) = (0.0, 1.0);
const FATIGUE_RANGE: (f64, f64) = (0.0, 10.0);
const FLOAT_STEP: f64 = 0.1;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SelectOption {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    Slider { min: f64, max: f64, step: f64, default: f64 },
    Select { options: Vec<SelectOption>, default: u8 },
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub control: Control,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FormSchema {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub trigger: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// Builds a `PredictionRequest` from whatever the page sent.
pub fn collect(input: &FormInput) -> PredictionRequest {
    let defaults = PredictionRequest::default();

    PredictionRequest {
        designation: input
            .designation
            .filter(|v| v.is_finite())
            .map(|v| v.round().clamp(DESIGNATION_RANGE.0, DESIGNATION_RANGE.1) as u8)
            .unwrap_or(defaults.designation),
        resource_allocation: snap(input.resource_allocation, RESOURCE_RANGE)
            .unwrap_or(defaults.resource_allocation),
        mental_fatigue: snap(input.mental_fatigue, FATIGUE_RANGE).unwrap_or(defaults.mental_fatigue),
        company_type: pick(input.company_type, &CompanyType::ALL).unwrap_or(defaults.company_type),
        wfh_setup: pick(input.wfh_setup, &WfhSetup::ALL).unwrap_or(defaults.wfh_setup),
        gender: pick(input.gender, &Gender::ALL).unwrap_or(defaults.gender),
    }
}

/// Clamps to `range` and rounds to the nearest 0.1 step.
fn snap(value: Option<f64>, range: (f64, f64)) -> Option<f32> {
    let value = value.filter(|v| v.is_finite())?;
    let steps = ((value.clamp(range.0, range.1) - range.0) / FLOAT_STEP).round();
    let snapped = (range.0 + steps * FLOAT_STEP).clamp(range.0, range.1);
    // 0.1 is not representable; strip the accumulated noise
    Some(((snapped * 10.0).round() / 10.0) as f32)
}

fn pick<T: Copy>(code: Option<i64>, variants: &[T]) -> Option<T> {
    let code = code?;
    let last = variants.len().checked_sub(1)?;
    Some(variants[code.clamp(0, last as i64) as usize])
}

pub fn form() -> FormSchema {
    let defaults = PredictionRequest::default();

    FormSchema {
        title: PAGE_TITLE,
        subtitle: PAGE_SUBTITLE,
        trigger: TRIGGER_LABEL,
        fields: vec![
            FieldSpec {
                name: "designation",
                label: "Designation Level",
                help: "0: Entry Level, 1: Junior, 2: Mid-Level, 3: Senior, 4: Lead, 5: Executive",
                control: Control::Slider {
                    min: DESIGNATION_RANGE.0,
                    max: DESIGNATION_RANGE.1,
                    step: 1.0,
                    default: defaults.designation as f64,
                },
            },
            FieldSpec {
                name: "resource_allocation",
                label: "Resource Allocation",
                help: "Workload level (0.0: Very Low, 0.5: Moderate, 1.0: Very High)",
                control: Control::Slider {
                    min: RESOURCE_RANGE.0,
                    max: RESOURCE_RANGE.1,
                    step: FLOAT_STEP,
                    default: defaults.resource_allocation as f64,
                },
            },
            FieldSpec {
                name: "mental_fatigue",
                label: "Mental Fatigue Score",
                help: "Rate your mental fatigue (0: No fatigue, 10: Extreme fatigue)",
                control: Control::Slider {
                    min: FATIGUE_RANGE.0,
                    max: FATIGUE_RANGE.1,
                    step: FLOAT_STEP,
                    default: defaults.mental_fatigue as f64,
                },
            },
            FieldSpec {
                name: "company_type",
                label: "Company Type",
                help: "Type of company you work for",
                control: Control::Select {
                    options: CompanyType::ALL
                        .iter()
                        .map(|c| SelectOption { value: *c as u8, label: c.label() })
                        .collect(),
                    default: defaults.company_type as u8,
                },
            },
            FieldSpec {
                name: "wfh_setup",
                label: "Work from Home Setup Available",
                help: "Do you have proper work from home setup?",
                control: Control::Select {
                    options: WfhSetup::ALL
                        .iter()
                        .map(|w| SelectOption { value: *w as u8, label: w.label() })
                        .collect(),
                    default: defaults.wfh_setup as u8,
                },
            },
            FieldSpec {
                name: "gender",
                label: "Gender",
                help: "Select your gender",
                control: Control::Select {
                    options: Gender::ALL
                        .iter()
                        .map(|g| SelectOption { value: *g as u8, label: g.label() })
                        .collect(),
                    default: defaults.gender as u8,
                },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FEATURE_NAMES;

    fn in_domain(request: &PredictionRequest) -> bool {
        request.designation <= 5
            && (0.0..=1.0).contains(&request.resource_allocation)
            && (0.0..=10.0).contains(&request.mental_fatigue)
    }

    #[test]
    fn empty_form_gives_defaults() {
        assert_eq!(collect(&FormInput::default()), PredictionRequest::default());
    }

    #[test]
    fn values_inside_the_domain_are_kept() {
        let request = collect(&FormInput {
            designation: Some(4.0),
            resource_allocation: Some(0.3),
            mental_fatigue: Some(7.6),
            company_type: Some(1),
            wfh_setup: Some(1),
            gender: Some(2),
        });
        assert_eq!(request.designation, 4);
        assert_eq!(request.resource_allocation, 0.3);
        assert_eq!(request.mental_fatigue, 7.6);
        assert_eq!(request.company_type, CompanyType::Product);
        assert_eq!(request.wfh_setup, WfhSetup::Yes);
        assert_eq!(request.gender, Gender::Other);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let high = collect(&FormInput {
            designation: Some(42.0),
            resource_allocation: Some(3.0),
            mental_fatigue: Some(11.5),
            company_type: Some(9),
            wfh_setup: Some(5),
            gender: Some(100),
        });
        assert_eq!(high.designation, 5);
        assert_eq!(high.resource_allocation, 1.0);
        assert_eq!(high.mental_fatigue, 10.0);
        assert_eq!(high.company_type, CompanyType::Other);
        assert_eq!(high.wfh_setup, WfhSetup::Yes);
        assert_eq!(high.gender, Gender::Other);

        let low = collect(&FormInput {
            designation: Some(-3.0),
            resource_allocation: Some(-0.2),
            mental_fatigue: Some(-1.0),
            company_type: Some(-1),
            wfh_setup: Some(-1),
            gender: Some(-7),
        });
        assert_eq!(low.to_array(), [0.0; 6]);
    }

    #[test]
    fn floats_snap_to_tenths() {
        let request = collect(&FormInput {
            designation: Some(2.6),
            resource_allocation: Some(0.34),
            mental_fatigue: Some(6.66),
            ..FormInput::default()
        });
        assert_eq!(request.designation, 3);
        assert_eq!(request.resource_allocation, 0.3);
        assert_eq!(request.mental_fatigue, 6.7);
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let request = collect(&FormInput {
            designation: Some(f64::NAN),
            resource_allocation: Some(f64::INFINITY),
            mental_fatigue: Some(f64::NEG_INFINITY),
            ..FormInput::default()
        });
        assert_eq!(request, PredictionRequest::default());
    }

    #[test]
    fn collected_requests_never_leave_the_domain() {
        let probes = [-1e9, -1.0, 0.0, 0.05, 0.95, 1.0, 4.99, 5.0, 9.96, 10.0, 10.04, 1e9];
        for &value in &probes {
            for code in [-5_i64, 0, 1, 2, 3, 50] {
                let request = collect(&FormInput {
                    designation: Some(value),
                    resource_allocation: Some(value),
                    mental_fatigue: Some(value),
                    company_type: Some(code),
                    wfh_setup: Some(code),
                    gender: Some(code),
                });
                assert!(in_domain(&request), "{:?} left its domain", request);
            }
        }
    }

    #[test]
    fn form_lists_fields_in_model_order() {
        let schema = form();
        let names: Vec<_> = schema.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, FEATURE_NAMES);
        assert_eq!(schema.trigger, "Predict Burnout Level");
    }

    #[test]
    fn form_defaults_match_request_defaults() {
        let schema = form();
        match &schema.fields[2].control {
            Control::Slider { default, step, max, .. } => {
                assert_eq!(*default, 5.0);
                assert_eq!(*step, 0.1);
                assert_eq!(*max, 10.0);
            }
            other => panic!("mental fatigue should be a slider, got {:?}", other),
        }
        match &schema.fields[4].control {
            Control::Select { options, default } => {
                assert_eq!(*default, 0);
                assert_eq!(options.len(), 2);
                assert_eq!(options[1].label, "Yes");
            }
            other => panic!("wfh setup should be a select, got {:?}", other),
        }
    }
}
