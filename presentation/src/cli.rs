use crate::render::{render_answer, render_error, render_index};
use application::rag_service::RagService;
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use domain::RagError;
use infrastructure::azure_openai_client::AzureOpenAiClient;
use infrastructure::config::Config;
use infrastructure::search::AzureSearchClient;
use shared::types::Result;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "hybrid_rag", version)]
#[command(about = "Answer questions from member messages using Azure AI Search and Azure OpenAI")]
pub struct Cli {
    /// Print the search index schema and exit
    #[arg(long)]
    pub describe_index: bool,

    /// Print the retrieved context before each answer
    #[arg(long)]
    pub show_context: bool,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Question for one-shot mode; starts the interactive loop when omitted
    #[arg(trailing_var_arg = true)]
    pub question: Vec<String>,
}

pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

pub struct CliApp {
    rag_service: RagService<AzureOpenAiClient, AzureSearchClient, AzureOpenAiClient>,
    search: AzureSearchClient,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        let openai = AzureOpenAiClient::new(config.chat, config.embedding);
        let search = AzureSearchClient::new(config.search);
        Self {
            rag_service: RagService::new(openai.clone(), search.clone(), openai),
            search,
        }
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        if cli.describe_index {
            return self.handle_describe_index().await;
        }
        if cli.question.is_empty() {
            self.handle_chat(cli.show_context).await
        } else {
            self.handle_question(&cli.question.join(" "), cli.show_context)
                .await;
            Ok(())
        }
    }

    async fn handle_chat(&self, show_context: bool) -> Result<()> {
        println!("Ask about the indexed messages. Type 'exit' or 'quit' to leave.");
        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Question")
                .allow_empty(true)
                .interact_text()?;
            if is_exit_command(&input) {
                break;
            }
            self.handle_question(&input, show_context).await;
        }
        Ok(())
    }

    async fn handle_question(&self, question: &str, show_context: bool) {
        debug!(chars = question.len(), "question received");
        let result = self.rag_service.query(question).await;

        if show_context {
            if let Ok(answer) = &result {
                println!("\n{}", "Context:".cyan().bold());
                if answer.context.is_empty() {
                    println!("{}", "(no documents retrieved)".dimmed());
                } else {
                    println!("{}", answer.context);
                }
            }
        }

        println!("\n{}\n", "Answer:".green().bold());
        let rendered = render_answer(&result);
        match result {
            Ok(_) => println!("{}", rendered),
            Err(RagError::InvalidInput) => println!("{}", rendered.yellow()),
            Err(_) => println!("{}", rendered.red()),
        }
    }

    async fn handle_describe_index(&self) -> Result<()> {
        match self.search.describe_index().await {
            Ok(index) => println!("{}", render_index(&index)),
            Err(e) => println!("{}", render_error(&RagError::Search(e)).red()),
        }
        Ok(())
    }
}
