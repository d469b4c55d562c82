//! Request-scoped data model for a diagnosis submission. Nothing here is
//! persisted — every value lives for one request and is discarded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The seven equipment categories offered by the form.
/// Display labels match the form options exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    #[default]
    Split,
    WindowUnit,
    FridgeFreezer,
    ColdRoom,
    WaterCooler,
    Vrf,
    Chiller,
}

impl EquipmentType {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::Split => "Ar Condicionado Split",
            EquipmentType::WindowUnit => "Ar Condicionado de Janela",
            EquipmentType::FridgeFreezer => "Geladeira/Freezer",
            EquipmentType::ColdRoom => "Câmara Frigorífica",
            EquipmentType::WaterCooler => "Bebedouro",
            EquipmentType::Vrf => "Sistema VRF",
            EquipmentType::Chiller => "Chiller",
        }
    }
}

/// How long the problem has been occurring — the form's four fixed buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemDuration {
    #[default]
    JustStarted,
    Days,
    Weeks,
    OverMonth,
}

impl ProblemDuration {
    pub fn label(&self) -> &'static str {
        match self {
            ProblemDuration::JustStarted => "Começou agora",
            ProblemDuration::Days => "Alguns dias",
            ProblemDuration::Weeks => "Algumas semanas",
            ProblemDuration::OverMonth => "Mais de um mês",
        }
    }
}

/// Equipment metadata and problem history collected by the form.
///
/// Absent fields default to what empty form widgets would produce: first
/// select option, empty strings, age zero, no maintenance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentContext {
    #[serde(default)]
    pub equipment_type: EquipmentType,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    /// Whole years, widget range 0..=50.
    #[serde(default)]
    pub age_years: u8,
    #[serde(default)]
    pub problem_duration: ProblemDuration,
    #[serde(default)]
    pub recent_maintenance: bool,
    /// Meaningful only when `recent_maintenance` is true.
    #[serde(default)]
    pub last_maintenance_date: Option<NaiveDate>,
}

/// The form's six symptom checkboxes. Field order here is the fixed
/// declaration order used whenever the active symptoms are listed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SymptomSet {
    #[serde(default)]
    pub abnormal_noise: bool,
    #[serde(default)]
    pub leak: bool,
    #[serde(default)]
    pub low_performance: bool,
    #[serde(default)]
    pub odd_smell: bool,
    #[serde(default)]
    pub excess_vibration: bool,
    #[serde(default)]
    pub ice_formation: bool,
}

impl SymptomSet {
    /// Labels of the checked symptoms, in declaration order.
    pub fn active_labels(&self) -> Vec<&'static str> {
        let flags = [
            (self.abnormal_noise, "Ruído Anormal"),
            (self.leak, "Vazamento"),
            (self.low_performance, "Baixo Rendimento"),
            (self.odd_smell, "Odor Estranho"),
            (self.excess_vibration, "Vibração Excessiva"),
            (self.ice_formation, "Formação de Gelo"),
        ];

        flags
            .into_iter()
            .filter_map(|(on, label)| on.then_some(label))
            .collect()
    }

    /// Comma-joined active labels. An empty set renders as an empty string,
    /// not an omitted section.
    pub fn joined(&self) -> String {
        self.active_labels().join(", ")
    }
}

/// Which prompt/parameter profile a submission uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisProfile {
    /// Five-section system prompt, full equipment/symptom context.
    #[default]
    Detailed,
    /// Four-point system prompt, raw description only.
    Quick,
}
