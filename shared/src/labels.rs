//! Display labels for the calculator form
//!
//! One fixed label set per supported locale. Simplified Chinese is the
//! source locale of the form; English mirrors it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::energy::{ActivityLevel, Gender, ResultRecord};
use crate::validation::ValidationFailure;

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn labels(&self) -> &'static LabelSet {
        match self {
            Locale::ZhCn => &ZH_CN,
            Locale::En => &EN,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" => Ok(Locale::ZhCn),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("Unsupported locale: {other}. Must be one of: zh-CN, en")),
        }
    }
}

/// Text shown for one input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldText {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub placeholder: &'static str,
    pub required: &'static str,
    pub not_a_number: &'static str,
    pub too_small: &'static str,
    pub too_large: &'static str,
}

impl FieldText {
    pub fn message(&self, failure: ValidationFailure) -> &'static str {
        match failure {
            ValidationFailure::Required => self.required,
            ValidationFailure::NotANumber => self.not_a_number,
            ValidationFailure::TooSmall => self.too_small,
            ValidationFailure::TooLarge => self.too_large,
        }
    }
}

/// Text shown for a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectText {
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// Labels for the three result values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultText {
    pub bmr: &'static str,
    pub tdee: &'static str,
    pub fat_loss_target: &'static str,
}

/// Complete label set for one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSet {
    pub title: &'static str,
    pub description: &'static str,
    pub age: FieldText,
    pub gender: SelectText,
    pub height: FieldText,
    pub weight: FieldText,
    pub activity_level: SelectText,
    pub genders: [&'static str; 2],
    pub activity_levels: [&'static str; 5],
    /// Result card labels
    pub results: ResultText,
    /// Labels used in the submission summary
    pub summary: ResultText,
    pub energy_unit: &'static str,
    pub submit: &'static str,
    pub reset: &'static str,
}

impl LabelSet {
    pub fn gender_option(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Male => self.genders[0],
            Gender::Female => self.genders[1],
        }
    }

    pub fn activity_option(&self, level: ActivityLevel) -> &'static str {
        let index = ActivityLevel::ALL
            .iter()
            .position(|l| *l == level)
            .unwrap_or_default();
        self.activity_levels[index]
    }

    fn lines(&self, text: &ResultText, results: &ResultRecord) -> String {
        [
            (text.bmr, results.bmr),
            (text.tdee, results.tdee),
            (text.fat_loss_target, results.fat_loss_target),
        ]
        .iter()
        .map(|(label, value)| format!("{label}: {value} {}", self.energy_unit))
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Result card text, one value per line
    pub fn render_results(&self, results: &ResultRecord) -> String {
        self.lines(&self.results, results)
    }

    /// Submission summary text, one value per line
    pub fn render_summary(&self, results: &ResultRecord) -> String {
        self.lines(&self.summary, results)
    }
}

pub static ZH_CN: LabelSet = LabelSet {
    title: "饮食热量计算器",
    description: "输入您的身体数据计算每日热量需求",
    age: FieldText {
        label: "年龄",
        unit: Some("岁"),
        placeholder: "请输入您的年龄",
        required: "请输入年龄",
        not_a_number: "年龄必须是整数",
        too_small: "年龄不能小于1岁",
        too_large: "年龄不能超过120岁",
    },
    gender: SelectText {
        label: "性别",
        placeholder: "选择性别",
    },
    height: FieldText {
        label: "身高",
        unit: Some("厘米"),
        placeholder: "请输入您的身高",
        required: "请输入身高",
        not_a_number: "身高必须是数字",
        too_small: "身高不能小于100厘米",
        too_large: "身高不能超过250厘米",
    },
    weight: FieldText {
        label: "体重",
        unit: Some("公斤"),
        placeholder: "请输入您的体重",
        required: "请输入体重",
        not_a_number: "体重必须是数字",
        too_small: "体重不能小于30公斤",
        too_large: "体重不能超过200公斤",
    },
    activity_level: SelectText {
        label: "活动水平",
        placeholder: "选择活动水平",
    },
    genders: ["男性", "女性"],
    activity_levels: [
        "久坐 (很少或没有运动)",
        "轻度活动 (每周1-3天轻度运动)",
        "中度活动 (每周3-5天中等强度运动)",
        "高度活动 (每周6-7天高强度运动)",
        "极高活动 (体力劳动或每天高强度训练)",
    ],
    results: ResultText {
        bmr: "基础代谢",
        tdee: "每日消耗",
        fat_loss_target: "减脂摄入",
    },
    summary: ResultText {
        bmr: "基础代谢(BMR)",
        tdee: "每日能量消耗(TDEE)",
        fat_loss_target: "减脂能量摄入",
    },
    energy_unit: "卡路里",
    submit: "计算热量",
    reset: "重置",
};

pub static EN: LabelSet = LabelSet {
    title: "Calorie Calculator",
    description: "Enter your body data to calculate your daily energy needs",
    age: FieldText {
        label: "Age",
        unit: Some("years"),
        placeholder: "Enter your age",
        required: "Please enter your age",
        not_a_number: "Age must be a whole number",
        too_small: "Age must be at least 1 year",
        too_large: "Age cannot exceed 120 years",
    },
    gender: SelectText {
        label: "Gender",
        placeholder: "Select gender",
    },
    height: FieldText {
        label: "Height",
        unit: Some("cm"),
        placeholder: "Enter your height",
        required: "Please enter your height",
        not_a_number: "Height must be a number",
        too_small: "Height must be at least 100 cm",
        too_large: "Height cannot exceed 250 cm",
    },
    weight: FieldText {
        label: "Weight",
        unit: Some("kg"),
        placeholder: "Enter your weight",
        required: "Please enter your weight",
        not_a_number: "Weight must be a number",
        too_small: "Weight must be at least 30 kg",
        too_large: "Weight cannot exceed 200 kg",
    },
    activity_level: SelectText {
        label: "Activity Level",
        placeholder: "Select activity level",
    },
    genders: ["Male", "Female"],
    activity_levels: [
        "Sedentary (little or no exercise)",
        "Light (light exercise 1-3 days/week)",
        "Moderate (moderate exercise 3-5 days/week)",
        "Active (hard exercise 6-7 days/week)",
        "Very active (physical job or hard training every day)",
    ],
    results: ResultText {
        bmr: "BMR",
        tdee: "Daily Expenditure",
        fat_loss_target: "Fat-loss intake",
    },
    summary: ResultText {
        bmr: "Basal Metabolic Rate (BMR)",
        tdee: "Total Daily Energy Expenditure (TDEE)",
        fat_loss_target: "Fat-loss intake",
    },
    energy_unit: "kcal",
    submit: "Calculate",
    reset: "Reset",
};

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: ResultRecord = ResultRecord {
        bmr: 1815,
        tdee: 2813,
        fat_loss_target: 2391,
    };

    #[test]
    fn test_locale_parsing() {
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert_eq!("zh_cn".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::ZhCn);
    }

    #[test]
    fn test_render_results_en() {
        assert_eq!(
            EN.render_results(&SAMPLE),
            "BMR: 1815 kcal\nDaily Expenditure: 2813 kcal\nFat-loss intake: 2391 kcal"
        );
    }

    #[test]
    fn test_render_summary_zh() {
        assert_eq!(
            ZH_CN.render_summary(&SAMPLE),
            "基础代谢(BMR): 1815 卡路里\n每日能量消耗(TDEE): 2813 卡路里\n减脂能量摄入: 2391 卡路里"
        );
    }

    #[test]
    fn test_option_texts() {
        assert_eq!(ZH_CN.gender_option(Gender::Female), "女性");
        assert_eq!(EN.activity_option(ActivityLevel::Sedentary), "Sedentary (little or no exercise)");
        assert!(ZH_CN.activity_option(ActivityLevel::VeryActive).starts_with("极高活动"));
    }

    #[test]
    fn test_field_messages() {
        assert_eq!(ZH_CN.age.message(ValidationFailure::TooSmall), "年龄不能小于1岁");
        assert_eq!(EN.weight.message(ValidationFailure::TooLarge), "Weight cannot exceed 200 kg");
        assert_eq!(EN.height.message(ValidationFailure::Required), "Please enter your height");
    }
}
