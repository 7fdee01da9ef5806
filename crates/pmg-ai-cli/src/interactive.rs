//! Interactive prompt loop

use pmg_ai_core::{GenerationOptions, ProviderSelector, Result};
use pmg_ai_providers::ProviderChain;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const EXIT_WORDS: [&str; 3] = ["sair", "exit", "quit"];

pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_WORDS.iter().any(|word| line.eq_ignore_ascii_case(word))
}

/// Answer prompts read from `input` until an exit word or end of input.
///
/// Returns the number of prompts answered.
pub async fn run<R, W>(
    chain: &ProviderChain,
    selector: ProviderSelector,
    options: &GenerationOptions,
    input: R,
    out: &mut W,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "PMG AI - Modo Interativo")?;
    writeln!(out, "Digite 'sair' para encerrar\n")?;

    let mut lines = input.lines();
    let mut answered = 0;

    loop {
        write!(out, "Prompt: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        if line.trim().is_empty() {
            continue;
        }
        if is_exit_command(&line) {
            break;
        }

        let response = chain.process(&line, selector, options).await;
        writeln!(out, "\nResposta: {}\n", response.text)?;
        writeln!(out, "[Provedor: {}]\n", response.provider)?;
        answered += 1;
    }

    debug!(answered, "Interactive session finished");
    writeln!(out, "Até logo!")?;
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmg_ai_core::ProviderKind;
    use pmg_ai_providers::LocalProvider;

    fn chain() -> ProviderChain {
        ProviderChain::new(LocalProvider::new().unwrap())
    }

    async fn session(input: &str) -> (usize, String) {
        let mut out = Vec::new();
        let answered = run(
            &chain(),
            ProviderSelector::Only(ProviderKind::Local),
            &GenerationOptions::default(),
            input.as_bytes(),
            &mut out,
        )
        .await
        .unwrap();
        (answered, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_words() {
        assert!(is_exit_command("sair"));
        assert!(is_exit_command("SAIR"));
        assert!(is_exit_command(" Quit "));
        assert!(is_exit_command("exit"));
        assert!(!is_exit_command("sair agora"));
        assert!(!is_exit_command(""));
    }

    #[tokio::test]
    async fn test_stops_at_exit_word() {
        let (answered, out) = session("Crie um script de vendas\nSair\nbom dia\n").await;
        assert_eq!(answered, 1);
        assert!(out.contains("Script de Vendas"));
        assert!(out.contains("[Provedor: local_ai]"));
        assert!(out.ends_with("Até logo!\n"));
    }

    #[tokio::test]
    async fn test_blank_lines_ignored_and_eof_ends() {
        let (answered, out) = session("\n   \nbom dia").await;
        assert_eq!(answered, 1);
        assert_eq!(out.matches("[Provedor: local_ai]").count(), 1);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let (answered, out) = session("").await;
        assert_eq!(answered, 0);
        assert!(out.starts_with("PMG AI - Modo Interativo"));
    }
}
