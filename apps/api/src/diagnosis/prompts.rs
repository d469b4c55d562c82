//! Static system prompts for the diagnosis pipeline. These never vary per
//! request — only the profile selects which one is sent.

use crate::diagnosis::models::DiagnosisProfile;
use crate::llm_client::CompletionParams;

/// Five-section persona prompt used by the `detailed` profile.
pub const DETAILED_SYSTEM: &str = "\
Você é um técnico especialista em refrigeração com mais de 20 anos de experiência em diagnóstico e manutenção de sistemas de refrigeração e ar condicionado.

CONTEXTO TÉCNICO:
- Você possui conhecimento profundo em sistemas split, janela, self contained, VRF e chillers
- Você entende completamente sobre ciclos de refrigeração, compressores, condensadores, evaporadores e válvulas de expansão
- Você domina diagnósticos relacionados a problemas elétricos, mecânicos e de fluido refrigerante

FORMATO DA ANÁLISE:
1. Diagnóstico Provável:
   - Liste os problemas mais prováveis em ordem de probabilidade
   - Indique o nível de gravidade (Baixo/Médio/Alto)
   - Estime a urgência do reparo

2. Causas Detalhadas:
   - Liste todas as possíveis causas
   - Explique a relação entre causa e sintoma
   - Mencione fatores agravantes

3. Soluções Recomendadas:
   - Providências imediatas que o usuário pode tomar
   - Procedimentos técnicos necessários
   - Estimativa de complexidade do reparo (Simples/Intermediário/Complexo)
   - Indicação se requer técnico especializado

4. Manutenção Preventiva:
   - Ações específicas para prevenir reincidência
   - Frequência recomendada de manutenções
   - Cuidados diários/semanais/mensais
   - Sinais de alerta para monitorar

5. Informações de Segurança:
   - Alertas sobre riscos específicos
   - Precauções necessárias
   - Situações que exigem atenção imediata";

/// Four-point short prompt used by the `quick` profile.
pub const QUICK_SYSTEM: &str = "\
Você é um técnico especializado em refrigeração com vasta experiência.
Analise os problemas descritos e forneça:
1. Diagnóstico provável
2. Possíveis causas
3. Sugestões de solução
4. Recomendações de manutenção preventiva";

/// Completion parameters for the `detailed` profile.
const DETAILED_PARAMS: CompletionParams = CompletionParams {
    model: "gpt-3.5-turbo",
    temperature: 0.4,
    max_tokens: 1000,
};

/// Completion parameters for the `quick` profile.
const QUICK_PARAMS: CompletionParams = CompletionParams {
    model: "gpt-4",
    temperature: 0.7,
    max_tokens: 500,
};

/// Returns the static system prompt for a profile.
pub fn system_prompt(profile: DiagnosisProfile) -> &'static str {
    match profile {
        DiagnosisProfile::Detailed => DETAILED_SYSTEM,
        DiagnosisProfile::Quick => QUICK_SYSTEM,
    }
}

/// Returns the fixed completion parameters for a profile.
pub fn params(profile: DiagnosisProfile) -> CompletionParams {
    match profile {
        DiagnosisProfile::Detailed => DETAILED_PARAMS,
        DiagnosisProfile::Quick => QUICK_PARAMS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_prompt_has_five_sections() {
        assert!(DETAILED_SYSTEM.contains("1. Diagnóstico Provável"));
        assert!(DETAILED_SYSTEM.contains("2. Causas Detalhadas"));
        assert!(DETAILED_SYSTEM.contains("3. Soluções Recomendadas"));
        assert!(DETAILED_SYSTEM.contains("4. Manutenção Preventiva"));
        assert!(DETAILED_SYSTEM.contains("5. Informações de Segurança"));
    }

    #[test]
    fn test_quick_prompt_has_four_points() {
        assert!(QUICK_SYSTEM.contains("1. Diagnóstico provável"));
        assert!(QUICK_SYSTEM.contains("4. Recomendações de manutenção preventiva"));
        assert!(!QUICK_SYSTEM.contains("5."));
    }

    #[test]
    fn test_params_per_profile() {
        let detailed = params(DiagnosisProfile::Detailed);
        assert_eq!(detailed.model, "gpt-3.5-turbo");
        assert_eq!(detailed.temperature, 0.4);
        assert_eq!(detailed.max_tokens, 1000);

        let quick = params(DiagnosisProfile::Quick);
        assert_eq!(quick.model, "gpt-4");
        assert_eq!(quick.temperature, 0.7);
        assert_eq!(quick.max_tokens, 500);
    }

    #[test]
    fn test_system_prompt_selection() {
        assert_eq!(system_prompt(DiagnosisProfile::Detailed), DETAILED_SYSTEM);
        assert_eq!(system_prompt(DiagnosisProfile::Quick), QUICK_SYSTEM);
    }
}
