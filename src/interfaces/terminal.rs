use crate::domain::payment::ApprovalUrl;
use crate::domain::ports::{Navigator, UserInteraction};
use crate::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

/// Prompts and notifications on a terminal.
///
/// Prompts and messages go to `output` (stderr for the CLI) so that stdout
/// only ever carries the approval URL. End of input counts as a cancelled
/// prompt. A preset answer, if given, is used for the first prompt instead
/// of reading input.
pub struct TerminalInteraction<R, W> {
    input: Mutex<BufReader<R>>,
    output: Mutex<W>,
    preset: std::sync::Mutex<Option<String>>,
}

impl TerminalInteraction<tokio::io::Stdin, tokio::io::Stderr> {
    pub fn stdio(preset: Option<String>) -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stderr(), preset)
    }
}

impl<R, W> TerminalInteraction<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W, preset: Option<String>) -> Self {
        Self {
            input: Mutex::new(BufReader::new(input)),
            output: Mutex::new(output),
            preset: std::sync::Mutex::new(preset),
        }
    }

    async fn write_text(&self, text: &str) {
        let mut output = self.output.lock().await;
        if let Err(e) = write_flushed(&mut *output, text).await {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

async fn write_flushed<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

#[async_trait]
impl<R, W> UserInteraction for TerminalInteraction<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn ask_text(&self, prompt: &str) -> Option<String> {
        let preset = self.preset.lock().unwrap_or_else(|e| e.into_inner()).take();
        if preset.is_some() {
            return preset;
        }

        self.write_text(&format!("{prompt}: ")).await;

        let mut line = String::new();
        let read = {
            let mut input = self.input.lock().await;
            input.read_line(&mut line).await
        };
        match read {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.strip_suffix('\n').unwrap_or(&line);
                let answer = answer.strip_suffix('\r').unwrap_or(answer);
                Some(answer.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read answer");
                None
            }
        }
    }

    async fn notify(&self, message: &str) {
        self.write_text(&format!("{message}\n")).await;
    }
}

/// "Navigates" by printing the approval URL for the user (or a calling
/// script) to open.
pub struct PrintNavigator<W> {
    output: Mutex<W>,
}

impl PrintNavigator<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin + Send> PrintNavigator<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> Navigator for PrintNavigator<W> {
    async fn navigate(&self, url: &ApprovalUrl) -> Result<()> {
        let mut output = self.output.lock().await;
        write_flushed(&mut *output, &format!("{url}\n")).await?;
        Ok(())
    }
}
