//! Prompt assembler — turns the collected form fields into the user message
//! sent alongside the static system prompt.
//!
//! Field values are inserted verbatim: no escaping, no length limiting,
//! arbitrary manufacturer/model text accepted.

use crate::diagnosis::models::{DiagnosisProfile, EquipmentContext, SymptomSet};

/// Builds the user message for a profile.
///
/// `detailed` interpolates the full equipment/symptom context around the
/// description; `quick` sends the raw description alone.
pub fn build_user_message(
    profile: DiagnosisProfile,
    equipment: &EquipmentContext,
    symptoms: &SymptomSet,
    description: &str,
) -> String {
    match profile {
        DiagnosisProfile::Detailed => build_detailed(equipment, symptoms, description),
        DiagnosisProfile::Quick => description.to_string(),
    }
}

fn build_detailed(
    equipment: &EquipmentContext,
    symptoms: &SymptomSet,
    description: &str,
) -> String {
    let maintenance = if equipment.recent_maintenance {
        "Sim"
    } else {
        "Não"
    };

    // The date line appears only when maintenance was recent and a date was
    // given; recent_maintenance = false never produces one.
    let maintenance_date_line = match (&equipment.last_maintenance_date, equipment.recent_maintenance)
    {
        (Some(date), true) => format!("\n- Data da última manutenção: {date}"),
        _ => String::new(),
    };

    format!(
        "INFORMAÇÕES DO EQUIPAMENTO:\n\
         - Tipo: {tipo}\n\
         - Fabricante: {fabricante}\n\
         - Modelo: {modelo}\n\
         - Idade: {idade} anos\n\
         \n\
         HISTÓRICO DO PROBLEMA:\n\
         - Tempo de ocorrência: {duracao}\n\
         - Manutenção recente: {manutencao}{data_manutencao}\n\
         \n\
         SINTOMAS MARCADOS:\n\
         {sintomas}\n\
         \n\
         DESCRIÇÃO DETALHADA:\n\
         {descricao}",
        tipo = equipment.equipment_type.label(),
        fabricante = equipment.manufacturer,
        modelo = equipment.model,
        idade = equipment.age_years,
        duracao = equipment.problem_duration.label(),
        manutencao = maintenance,
        data_manutencao = maintenance_date_line,
        sintomas = symptoms.joined(),
        descricao = description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::models::{EquipmentType, ProblemDuration};
    use chrono::NaiveDate;

    fn sample_equipment() -> EquipmentContext {
        EquipmentContext {
            equipment_type: EquipmentType::FridgeFreezer,
            manufacturer: "Consul".to_string(),
            model: "CRB39".to_string(),
            age_years: 7,
            problem_duration: ProblemDuration::Weeks,
            recent_maintenance: false,
            last_maintenance_date: None,
        }
    }

    #[test]
    fn test_every_field_appears_verbatim() {
        let symptoms = SymptomSet {
            ice_formation: true,
            ..Default::default()
        };
        let message = build_user_message(
            DiagnosisProfile::Detailed,
            &sample_equipment(),
            &symptoms,
            "não está gelando direito",
        );

        assert!(message.contains("Geladeira/Freezer"));
        assert!(message.contains("Consul"));
        assert!(message.contains("CRB39"));
        assert!(message.contains("Idade: 7 anos"));
        assert!(message.contains("Algumas semanas"));
        assert!(message.contains("Manutenção recente: Não"));
        assert!(message.contains("Formação de Gelo"));
        assert!(message.contains("não está gelando direito"));
    }

    #[test]
    fn test_section_layout() {
        let message = build_user_message(
            DiagnosisProfile::Detailed,
            &sample_equipment(),
            &SymptomSet::default(),
            "x",
        );
        let info = message.find("INFORMAÇÕES DO EQUIPAMENTO:").unwrap();
        let history = message.find("HISTÓRICO DO PROBLEMA:").unwrap();
        let symptoms = message.find("SINTOMAS MARCADOS:").unwrap();
        let description = message.find("DESCRIÇÃO DETALHADA:").unwrap();
        assert!(info < history && history < symptoms && symptoms < description);
    }

    #[test]
    fn test_empty_symptom_set_renders_empty_section() {
        let message = build_user_message(
            DiagnosisProfile::Detailed,
            &sample_equipment(),
            &SymptomSet::default(),
            "compressor não liga",
        );
        // Section header present, followed by an empty line
        assert!(message.contains("SINTOMAS MARCADOS:\n\n"));
        assert!(message.contains("compressor não liga"));
    }

    #[test]
    fn test_symptoms_joined_in_declaration_order() {
        let symptoms = SymptomSet {
            leak: true,
            excess_vibration: true,
            ..Default::default()
        };
        let message = build_user_message(
            DiagnosisProfile::Detailed,
            &sample_equipment(),
            &symptoms,
            "x",
        );
        assert!(message.contains("Vazamento, Vibração Excessiva"));
    }

    #[test]
    fn test_no_maintenance_means_no_date_line() {
        let message = build_user_message(
            DiagnosisProfile::Detailed,
            &sample_equipment(),
            &SymptomSet::default(),
            "x",
        );
        assert!(!message.contains("Data da última manutenção"));
    }

    #[test]
    fn test_date_line_ignored_without_recent_maintenance() {
        // A stray date on a "no recent maintenance" submission is never rendered
        let mut equipment = sample_equipment();
        equipment.last_maintenance_date = NaiveDate::from_ymd_opt(2026, 3, 10);
        let message =
            build_user_message(DiagnosisProfile::Detailed, &equipment, &SymptomSet::default(), "x");
        assert!(!message.contains("2026-03-10"));
    }

    #[test]
    fn test_recent_maintenance_with_date() {
        let mut equipment = sample_equipment();
        equipment.recent_maintenance = true;
        equipment.last_maintenance_date = NaiveDate::from_ymd_opt(2026, 3, 10);
        let message =
            build_user_message(DiagnosisProfile::Detailed, &equipment, &SymptomSet::default(), "x");
        assert!(message.contains("Manutenção recente: Sim"));
        assert!(message.contains("Data da última manutenção: 2026-03-10"));
    }

    #[test]
    fn test_arbitrary_manufacturer_text_is_not_escaped() {
        let mut equipment = sample_equipment();
        equipment.manufacturer = "<b>ACME & Filhos</b>\n\"refrigeração\"".to_string();
        let message =
            build_user_message(DiagnosisProfile::Detailed, &equipment, &SymptomSet::default(), "x");
        assert!(message.contains("<b>ACME & Filhos</b>\n\"refrigeração\""));
    }

    #[test]
    fn test_quick_profile_sends_raw_description_only() {
        let symptoms = SymptomSet {
            leak: true,
            ..Default::default()
        };
        let message = build_user_message(
            DiagnosisProfile::Quick,
            &sample_equipment(),
            &symptoms,
            "o ar condicionado está fazendo barulho e não está gelando",
        );
        assert_eq!(
            message,
            "o ar condicionado está fazendo barulho e não está gelando"
        );
    }
}
