use serde::Serialize;

use crate::chart::PieChart;
use crate::error::{BurnoutError, Result};

pub const CHART_TITLE: &str = "Burnout Prediction";

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum BurnoutClass {
    NoBurnout = 0,
    RiskOfBurnout = 1,
    SevereBurnout = 2,
}

impl BurnoutClass {
    pub fn from_index(index: i64) -> Result<Self> {
        match index {
            0 => Ok(BurnoutClass::NoBurnout),
            1 => Ok(BurnoutClass::RiskOfBurnout),
            2 => Ok(BurnoutClass::SevereBurnout),
            other => Err(BurnoutError::prediction(format!(
                "indice de classe inconnu: {} (attendu 0..={})",
                other,
                CATEGORIES.len() - 1
            ))),
        }
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    pub fn category(self) -> &'static Category {
        &CATEGORIES[self as usize]
    }
}

#[derive(Debug)]
pub struct Category {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub advice: &'static [&'static str],
}

/// Indexed by class. Adding a class means adding a row here and a variant above.
pub static CATEGORIES: [Category; 3] = [
    Category {
        label: "No Burnout",
        color: "green",
        icon: "✅",
        advice: &[
            "Keep maintaining your current work-life balance",
            "Continue with regular breaks and self-care practices",
            "Stay connected with your team and maintain open communication",
        ],
    },
    Category {
        label: "Risk of Burnout",
        color: "orange",
        icon: "⚠️",
        advice: &[
            "Consider reducing your workload if possible",
            "Take regular breaks during work hours",
            "Discuss your concerns with your supervisor",
            "Practice stress-management techniques",
        ],
    },
    Category {
        label: "Severe Burnout",
        color: "red",
        icon: "🚨",
        advice: &[
            "Urgent: Consider taking time off to recover",
            "Seek professional help or counseling",
            "Discuss workload reduction with your supervisor",
            "Implement strict boundaries between work and personal life",
        ],
    },
];

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RenderedResult {
    pub class_index: i64,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub headline: String,
    pub advice: Vec<&'static str>,
    pub chart: PieChart,
    pub chart_svg: String,
}

pub fn present(class_index: i64) -> Result<RenderedResult> {
    let class = BurnoutClass::from_index(class_index)?;
    let category = class.category();
    let chart = PieChart::single(CHART_TITLE, category.label, category.color);

    Ok(RenderedResult {
        class_index,
        label: category.label,
        color: category.color,
        icon: category.icon,
        headline: format!("Predicted Burnout Level: {}", category.label),
        advice: category.advice.to_vec(),
        chart_svg: chart.to_svg(),
        chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_burnout_is_green_with_three_tips() {
        let result = present(0).unwrap();
        assert_eq!(result.label, "No Burnout");
        assert_eq!(result.color, "green");
        assert_eq!(result.advice.len(), 3);
        assert!(result.advice[0].starts_with("Keep maintaining"));
    }

    #[test]
    fn risk_is_orange_with_four_tips() {
        let result = present(1).unwrap();
        assert_eq!(result.label, "Risk of Burnout");
        assert_eq!(result.color, "orange");
        assert_eq!(result.advice.len(), 4);
    }

    #[test]
    fn severe_is_red_and_urges_professional_help() {
        let result = present(2).unwrap();
        assert_eq!(result.label, "Severe Burnout");
        assert_eq!(result.color, "red");
        assert_eq!(result.advice.len(), 4);
        assert!(result.advice[0].starts_with("Urgent"));
        assert!(result.advice.iter().any(|a| a.contains("professional help")));
    }

    #[test]
    fn chart_has_one_slice_in_the_category_colour() {
        for index in 0..3 {
            let result = present(index).unwrap();
            assert_eq!(result.chart.title, CHART_TITLE);
            assert_eq!(result.chart.slice.label, result.label);
            assert_eq!(result.chart.slice.color, result.color);
            assert!(result.chart_svg.contains(&format!(r#"fill="{}""#, result.color)));
            assert_eq!(result.headline, format!("Predicted Burnout Level: {}", result.label));
        }
    }

    #[test]
    fn unknown_index_is_a_prediction_error() {
        for index in [-1, 3, 42, i64::MAX] {
            match present(index) {
                Err(BurnoutError::Prediction(_)) => {}
                other => panic!("index {} should fail, got {:?}", index, other),
            }
        }
    }

    #[test]
    fn class_round_trips_through_its_index() {
        for index in 0..CATEGORIES.len() as i64 {
            assert_eq!(BurnoutClass::from_index(index).unwrap().index(), index);
        }
    }
}
