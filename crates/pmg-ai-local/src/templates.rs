//! Response templates
//!
//! Placeholders are written `{name}` and filled by [`render`] in a single
//! pass, so substituted values are never re-scanned.

/// Section headers every sales script carries
pub const SALES_SCRIPT_SECTIONS: [&str; 5] = [
    "ABERTURA ESTRATÉGICA",
    "CONTEXTUALIZAÇÃO INTELIGENTE",
    "PROPOSTA DE VALOR",
    "CALL TO ACTION ASSERTIVO",
    "FECHAMENTO PROFISSIONAL",
];

pub const SALES_SCRIPT: &str = r#"🤖 **Script de Vendas Otimizado - Gerado por IA Local**

**🎯 ABERTURA ESTRATÉGICA:**
"Olá! Sou da PMG Atacadista e estive analisando o mercado de {atividade} em {cidade}. Identifiquei que {cliente} tem um perfil muito interessante para uma parceria estratégica."

**💡 CONTEXTUALIZAÇÃO INTELIGENTE:**
"Nossa empresa tem 30 anos de experiência no mercado de distribuição e trabalhamos especificamente com estabelecimentos do setor de {atividade}. Nossos dados mostram excelentes oportunidades de otimização para empresas como {cliente}."

**🎯 PROPOSTA DE VALOR:**
"Podemos oferecer não apenas produtos de qualidade superior, mas também consultoria especializada que pode aumentar sua margem de lucro em até 20%. Nosso diferencial está na personalização do atendimento."

**🚀 CALL TO ACTION ASSERTIVO:**
"Gostaria de agendar uma apresentação de 20 minutos para mostrar especificamente como {cliente} pode se beneficiar? Tenho cases de sucesso similares em {cidade}."

**💼 FECHAMENTO PROFISSIONAL:**
"Nossa missão é ser mais que um fornecedor - queremos ser o parceiro estratégico que {cliente} precisa para crescer no mercado de {cidade}."

---
*Gerado por IA Local - PMG Atacadista*"#;

pub const PERSONALIZED_APPROACH: &str = r#"🎨 **Abordagem Personalizada - IA Local:**

**Para: {cliente}**
**Segmento: {atividade}**
**Localização: {cidade}**

---

**ESTRATÉGIA PERSONALIZADA:**

📧 **Primeira Abordagem:**
"Olá! Identifiquei {cliente} como uma empresa com grande potencial em {cidade}. Nossa distribuidora PMG tem soluções específicas para o segmento de {atividade}."

📞 **Follow-up Telefônico:**
"Estive analisando o mercado de {atividade} em {cidade} e {cliente} se destaca pela qualidade. Gostaria de apresentar como podemos ser parceiros estratégicos."

🤝 **Reunião Comercial:**
"Com base na análise do perfil de {cliente}, preparei uma proposta customizada que pode impactar positivamente seus resultados em {cidade}."

**PONTOS DE DOR IDENTIFICADOS:**
• Gestão de custos com fornecedores
• Necessidade de produtos específicos para {atividade}
• Otimização de margem de lucro
• Regularidade no abastecimento

**SOLUÇÕES PMG:**
✅ Preços competitivos com qualidade garantida
✅ Mix de produtos específico para {atividade}
✅ Consultoria gratuita de otimização
✅ Logística eficiente para {cidade}

---
*Estratégia gerada por IA Local - PMG Atacadista*"#;

pub const CONTENT_OPTIMIZATION: &str = r#"🚀 **Conteúdo Otimizado pela IA Local:**

**MELHORIAS APLICADAS:**
✅ Linguagem mais assertiva e direcionada
✅ Foco nos benefícios específicos do cliente
✅ Call-to-action mais convincente
✅ Estrutura otimizada para conversão

**ELEMENTOS OTIMIZADOS:**
• **Tom:** Mais consultivo e menos vendedor
• **Estrutura:** Fluxo lógico de argumentação
• **Benefícios:** Quantificados e específicos
• **Urgência:** Criada de forma natural

**MÉTRICAS ESPERADAS:**
📈 Aumento de 15-25% na taxa de resposta
📈 Redução de 30% no tempo de ciclo de venda
📈 Melhoria de 40% na qualificação de leads

*Otimização gerada por IA Local - PMG Atacadista*"#;

pub const SEGMENT_DETECTION: &str = "🎯 **Segmento Detectado pela IA:** {segmento}\n\nConfiança: {confianca}%\nAnálise: Baseado na presença de palavras-chave específicas do segmento, a IA identificou este como o tipo de negócio mais provável.";

pub const GENERIC_RESPONSES: [&str; 3] = [
    "🤖 **Análise Concluída pela IA Local:**\n\nCom base na sua consulta, identifiquei oportunidades significativas de negócio. A PMG Atacadista pode desenvolver soluções personalizadas que atendam especificamente às suas necessidades comerciais.",
    "🎯 **Processamento IA Finalizado:**\n\nSua solicitação foi analisada com sucesso. Nossa expertise de 30 anos no mercado nos permite oferecer insights valiosos e soluções práticas para otimizar seus resultados.",
    "💡 **Resposta Gerada por IA:**\n\nBaseado na análise do seu prompt, identifiquei pontos-chave que podem ser explorados comercialmente. A PMG Atacadista tem o conhecimento e recursos para transformar essas oportunidades em resultados concretos.",
];

/// Fill `{name}` placeholders from `bindings`; unknown placeholders stay verbatim
pub fn render(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match bindings.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
