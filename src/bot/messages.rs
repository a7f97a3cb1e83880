//! Fixed reply texts.

pub const MAIN_MENU: &str = "📋 *Menu Principal*\n\
1️⃣ Novo Cliente\n\
2️⃣ Pagamento\n\
3️⃣ Suporte\n\
4️⃣ Catálogo\n\n\
Digite o número da opção desejada.";

pub const NEW_CUSTOMER: &str = "🎉 *Seja bem-vindo!*\n\
Nossos planos incluem canais ao vivo, filmes e séries em HD.\n\
📱 Funciona em Smart TV, celular, TV Box e computador.\n\
🆓 Peça seu teste grátis de 4 horas respondendo *TESTE*.\n\n\
Digite *menu* para voltar.";

pub const CATALOG_PROMPT: &str = "🎬 Digite o nome do filme ou série que você procura.\n\
Ex.: *Matrix* ou *Dark S1*";

pub const GENERIC_ERROR: &str =
    "⚠️ Ocorreu um erro ao processar sua solicitação. Tente novamente em instantes.";

pub const COMPLETION_UNAVAILABLE: &str =
    "🤖 Nosso atendimento automático está indisponível no momento. Digite *menu* para ver as opções.";

pub const COMPLETION_FAILED: &str =
    "😕 Não consegui responder agora. Tente novamente ou digite *menu* para ver as opções.";

pub const NO_SYNOPSIS: &str = "Sinopse não disponível.";

pub const UNKNOWN_DATE: &str = "—";

pub const SUPPORT_ROLE: &str = "Você é um atendente de suporte educado e objetivo de uma revenda de IPTV. \
Ajude com problemas de conexão, travamentos, instalação de aplicativos e acesso. \
Responda em português do Brasil, em poucas linhas.";

pub const FALLBACK_ROLE: &str = "Você é um atendente cordial de uma revenda de IPTV. \
Responda em português do Brasil, em poucas linhas. \
Se o cliente parecer perdido, sugira digitar *menu* para ver as opções.";

pub fn payment(pix_key: &str) -> String {
    format!(
        "💳 *Pagamento*\n\
         Aceitamos PIX.\n\
         🔑 Chave PIX: *{}*\n\n\
         Após o pagamento, envie o comprovante aqui para liberarmos seu acesso.\n\
         Digite *menu* para voltar.",
        pix_key
    )
}

pub fn catalog_not_found(term: &str) -> String {
    format!(
        "❌ Não encontrei *{}* no nosso catálogo.\n\
         Tente outro título ou digite *voltar* para o menu.",
        term
    )
}

pub fn catalog_without_details(title: &str) -> String {
    format!(
        "✅ *{}* está disponível no nosso catálogo!\n\
         Não encontrei mais detalhes sobre este título agora.",
        title
    )
}
