//! JSON-lines transport: one envelope per line on an async writer.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::task::JoinHandle;

use crate::{WebError, WebLink};

/// Marks the link ready, writes the commands held until then, then every
/// envelope received until the display side is dropped. Each envelope is
/// followed by `\n`. Returns the number of lines written.
pub async fn pump_lines<W>(mut link: WebLink, mut writer: W) -> Result<u64, WebError>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0u64;
    let held = link.mark_ready();
    for line in held {
        write_line(&mut writer, &line).await?;
        written += 1;
    }

    while let Some(line) = link.lines.recv().await {
        write_line(&mut writer, &line).await?;
        written += 1;
    }

    link.mark_not_ready();
    log::debug!("transport closed after {written} lines");
    Ok(written)
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<(), WebError> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

/// Spawns [`pump_lines`] on stdout.
pub fn spawn_stdout(link: WebLink) -> JoinHandle<Result<u64, WebError>> {
    tokio::spawn(pump_lines(link, tokio::io::stdout()))
}
