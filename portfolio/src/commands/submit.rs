//! Terminal front end for the contact form.

use std::net::SocketAddr;

use anyhow::{bail, Context};
use clap::Args;
use portfolio_client::{ContactForm, SubmissionOutcome, SubmitRejected, CONFIRMATION};
use portfolio_config::{Config, Duration, HttpConfig};
use portfolio_di::Provide;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use url::Url;

use crate::environment::{types::RelayApi, ClientProvider};

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Base url of the relay [default: the configured http address]
    #[arg(long)]
    url: Option<Url>,
    /// Your name
    #[arg(long)]
    name: Option<String>,
    /// Your email address
    #[arg(long)]
    email: Option<String>,
    /// The message to send
    #[arg(long)]
    message: Option<String>,
    /// How long to wait for the relay to answer
    #[arg(long, default_value = "30s")]
    timeout: Duration,
}

pub async fn submit(config: Config, args: SubmitArgs) -> anyhow::Result<()> {
    let base_url = match args.url {
        Some(url) => url,
        None => default_url(&config.http)?,
    };
    let relay: RelayApi = ClientProvider::new(&base_url, *args.timeout)?.provide();

    let mut form = ContactForm::new();
    form.set_name(args.name.unwrap_or_default());
    form.set_email(args.email.unwrap_or_default());
    form.set_message(args.message.unwrap_or_default());

    let mut prompt = Prompt::new();
    loop {
        fill_missing(&mut form, &mut prompt).await?;

        match form.submit(&relay).await {
            Err(SubmitRejected::InvalidEmail) => {
                eprintln!("{}", SubmitRejected::InvalidEmail);
                form.set_email("");
            }
            Err(rejected) => eprintln!("{rejected}"),
            Ok(SubmissionOutcome::Success) => {
                println!("Message sent! {CONFIRMATION}");
                if !prompt.confirm("Send another message?").await? {
                    return Ok(());
                }
                form.reset();
            }
            Ok(SubmissionOutcome::Failure(_)) => {
                if let Some(alert) = form.take_alert() {
                    eprintln!("{alert}");
                }
                if !prompt.confirm("Try again?").await? {
                    bail!("Failed to send message");
                }
            }
        }
    }
}

async fn fill_missing(form: &mut ContactForm, prompt: &mut Prompt) -> anyhow::Result<()> {
    if form.name().is_empty() {
        form.set_name(prompt.required("Name").await?);
    }
    if form.email().is_empty() {
        form.set_email(prompt.required("Email").await?);
    }
    if form.message().is_empty() {
        form.set_message(prompt.required("Message").await?);
    }
    Ok(())
}

/// The relay as served by `serve` with the current config.
fn default_url(config: &HttpConfig) -> anyhow::Result<Url> {
    let addr = SocketAddr::from((config.host, config.port));
    format!("http://{addr}/")
        .parse()
        .with_context(|| format!("Failed to build relay url for {addr}"))
}

struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Returns `None` at the end of input.
    async fn line(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(format!("{label}: ").as_bytes()).await?;
        stdout.flush().await?;
        self.lines.next_line().await.map_err(Into::into)
    }

    async fn required(&mut self, label: &str) -> anyhow::Result<String> {
        self.line(label)
            .await?
            .map(|line| line.trim().to_owned())
            .context("Aborted")
    }

    async fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = self.line(&format!("{question} [y/N]")).await?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y" | "Y" | "yes")
        ))
    }
}
