mod config;
mod terminal;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use studyforge_core::{Difficulty, Technology};
use studyforge_generator::{ContentGenerator, GeminiProvider};
use studyforge_markdown::{render, render_with, RenderOptions};
use studyforge_session::{
    clamp_count, ExercisePanel, FlashcardPanel, LearnPanel, ProjectPanel,
};

use config::Config;

#[derive(Parser)]
#[command(name = "studyforge")]
#[command(about = "StudyForge — AI-generated learning content for web technologies")]
#[command(version)]
struct Cli {
    /// Print the flat markdown export instead of the rendered view
    #[arg(long, global = true)]
    markdown: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain a topic in a chosen technology
    Learn {
        /// Technology to study
        #[arg(short, long, default_value = "javascript")]
        technology: Technology,
        /// Topic to explain
        #[arg(short = 'o', long)]
        topic: String,
    },
    /// Generate flashcards for a concept
    Flashcards {
        /// Technology to study
        #[arg(short, long, default_value = "javascript")]
        technology: Technology,
        /// Concept to drill
        #[arg(short, long)]
        concept: String,
    },
    /// Generate practice exercises
    Exercises {
        /// Technology to study
        #[arg(short, long, default_value = "javascript")]
        technology: Technology,
        /// Exercise topic
        #[arg(short = 'o', long)]
        topic: String,
        /// Difficulty level
        #[arg(short, long, default_value = "beginner")]
        difficulty: Difficulty,
        /// Number of exercises (clamped to 1-5)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: i64,
        /// Also generate a hint for each exercise
        #[arg(long)]
        hints: bool,
        /// Also generate a solution for each exercise
        #[arg(long)]
        solutions: bool,
    },
    /// Generate a project idea
    Project {
        /// Technology to build with (repeatable)
        #[arg(short, long = "technology", required = true)]
        technologies: Vec<Technology>,
        /// Optional topic to center the idea on
        #[arg(short = 'o', long)]
        topic: Option<String>,
        /// Also generate the step-by-step guide
        #[arg(long)]
        details: bool,
        /// Also generate extension suggestions
        #[arg(long)]
        suggestions: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let Some(api_key) = config.gemini_api_key.clone() else {
        anyhow::bail!(
            "GEMINI_API_KEY is not set; the generation service requires an API credential"
        );
    };
    let mut provider = GeminiProvider::new(api_key);
    if let Some(url) = &config.gemini_base_url {
        provider = provider.with_base_url(url);
    }
    info!(model = %config.model, "Registered Gemini provider");
    let generator = ContentGenerator::new(Arc::new(provider), &config.model);

    match cli.command {
        Commands::Learn { technology, topic } => {
            run_learn(&generator, technology, topic, cli.markdown).await
        }
        Commands::Flashcards {
            technology,
            concept,
        } => run_flashcards(&generator, technology, concept, cli.markdown).await,
        Commands::Exercises {
            technology,
            topic,
            difficulty,
            count,
            hints,
            solutions,
        } => {
            run_exercises(
                &generator, technology, topic, difficulty, count, hints, solutions, cli.markdown,
            )
            .await
        }
        Commands::Project {
            technologies,
            topic,
            details,
            suggestions,
        } => run_project(&generator, technologies, topic, details, suggestions, cli.markdown).await,
    }
}

async fn run_learn(
    generator: &ContentGenerator,
    technology: Technology,
    topic: String,
    markdown: bool,
) -> Result<()> {
    let mut panel = LearnPanel::new();
    panel.technology = technology;
    panel.topic = topic;

    let request = panel.begin_request()?;
    match generator.explain(request.technology, &request.topic).await {
        Ok(content) => panel.accept(content),
        Err(err) => panel.fail(err.user_message("learning content")),
    }

    if let Some(message) = panel.content.error() {
        terminal::note_error(message);
        return Ok(());
    }
    if markdown {
        if let Some(md) = panel.markdown() {
            println!("{md}");
        }
        return Ok(());
    }
    if let Some(content) = panel.content.value() {
        println!("Topic: {} ({})\n", panel.topic, panel.technology.label());
        terminal::print_nodes(&render(content, "learn"));
    }
    Ok(())
}

async fn run_flashcards(
    generator: &ContentGenerator,
    technology: Technology,
    concept: String,
    markdown: bool,
) -> Result<()> {
    let mut panel = FlashcardPanel::new();
    panel.technology = technology;
    panel.concept = concept;

    let request = panel.begin_request()?;
    match generator
        .flashcards(request.technology, &request.concept)
        .await
    {
        Ok(drafts) => panel.accept(drafts),
        Err(err) => panel.fail(err.user_message("flashcards")),
    }

    if let Some(message) = panel.cards.error() {
        terminal::note_error(message);
        return Ok(());
    }
    let cards = panel.cards.value().cloned().unwrap_or_default();
    if markdown {
        for card in &cards {
            println!("{}\n", panel.markdown(card));
        }
        return Ok(());
    }
    println!(
        "{} flashcards about '{}' ({})\n",
        cards.len(),
        panel.concept,
        panel.technology.label()
    );
    for (i, card) in cards.iter().enumerate() {
        println!("Card {}:", i + 1);
        println!("  Q: {}", card.question);
        println!("  A: {}\n", card.answer);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn run_exercises(
    generator: &ContentGenerator,
    technology: Technology,
    topic: String,
    difficulty: Difficulty,
    count: i64,
    hints: bool,
    solutions: bool,
    markdown: bool,
) -> Result<()> {
    let mut panel = ExercisePanel::new();
    panel.technology = technology;
    panel.topic = topic;
    panel.difficulty = difficulty;
    panel.count = clamp_count(count);

    let request = panel.begin_request()?;
    match generator
        .exercises(
            request.technology,
            &request.topic,
            request.difficulty,
            request.count,
        )
        .await
    {
        Ok(drafts) => panel.accept(drafts),
        Err(err) => panel.fail(err.user_message("exercises")),
    }

    if let Some(message) = panel.batch.error() {
        terminal::note_error(message);
        return Ok(());
    }

    // Follow-up generation is scoped per exercise: one failure marks that
    // item and leaves its siblings alone.
    let ids: Vec<_> = panel.items().iter().map(|item| item.exercise.id).collect();
    for id in &ids {
        if hints {
            match panel.begin_hint(*id) {
                Ok(item_request) => match generator
                    .hint(item_request.summary(), item_request.technology)
                    .await
                {
                    Ok(text) => panel.accept_hint(*id, text),
                    Err(err) => panel.fail_hint(*id, err.user_message("a hint")),
                },
                Err(err) => terminal::note_error(&err.to_string()),
            }
        }
        if solutions {
            match panel.begin_solution(*id) {
                Ok(item_request) => match generator
                    .solution(item_request.summary(), item_request.technology)
                    .await
                {
                    Ok(text) => panel.accept_solution(*id, text),
                    Err(err) => panel.fail_solution(*id, err.user_message("a solution")),
                },
                Err(err) => terminal::note_error(&err.to_string()),
            }
        }
    }

    if markdown {
        for id in &ids {
            if let Some(md) = panel.markdown(*id) {
                println!("{md}");
            }
        }
        return Ok(());
    }

    for (i, item) in panel.items().iter().enumerate() {
        let id = item.exercise.id;
        println!("Exercise {}: {}\n", i + 1, item.exercise.title);
        terminal::print_nodes(&render(&item.exercise.description, &format!("ex-{id}-description")));
        terminal::print_nodes(&render(&item.exercise.statement, &format!("ex-{id}-statement")));
        if let Some(hint) = item.hint.value() {
            println!("Hint:");
            terminal::print_nodes(&render(hint, &format!("ex-{id}-hint")));
        }
        if let Some(message) = item.hint.error() {
            terminal::note_error(message);
        }
        if let Some(solution) = item.solution.value() {
            println!("Solution:");
            terminal::print_nodes(&render(solution, &format!("ex-{id}-solution")));
        }
        if let Some(message) = item.solution.error() {
            terminal::note_error(message);
        }
    }
    Ok(())
}

async fn run_project(
    generator: &ContentGenerator,
    technologies: Vec<Technology>,
    topic: Option<String>,
    details: bool,
    suggestions: bool,
    markdown: bool,
) -> Result<()> {
    let mut panel = ProjectPanel::new();
    for technology in technologies {
        if !panel.technologies.contains(&technology) {
            panel.toggle_technology(technology);
        }
    }
    panel.topic = topic.unwrap_or_default();

    let request = panel.begin_request()?;
    match generator
        .project_idea(&request.technologies, request.topic.as_deref())
        .await
    {
        Ok(draft) => panel.accept(draft),
        Err(err) => panel.fail(err.user_message("a project idea")),
    }

    if let Some(message) = panel.idea.error() {
        terminal::note_error(message);
        return Ok(());
    }

    if details {
        match panel.begin_details() {
            Ok(details_request) => match generator
                .project_details(
                    &details_request.name,
                    &details_request.description,
                    &details_request.suggested_tech,
                )
                .await
            {
                Ok(text) => panel.accept_details(text),
                Err(err) => panel.fail_details(err.user_message("the detailed guide")),
            },
            Err(err) => terminal::note_error(&err.to_string()),
        }
    }
    if suggestions {
        match panel.begin_suggestions() {
            Ok(name) => match generator.project_suggestions(&name).await {
                Ok(items) => panel.accept_suggestions(items),
                Err(err) => panel.fail_suggestions(err.user_message("suggestions")),
            },
            Err(err) => terminal::note_error(&err.to_string()),
        }
    }

    if markdown {
        if let Some(md) = panel.markdown() {
            println!("{md}");
        }
        return Ok(());
    }

    if let Some(idea) = panel.idea.value() {
        println!("Project idea: {}\n", idea.name);
        println!("{}\n", idea.description);
        if !idea.features.is_empty() {
            println!("Main features:");
            for feature in &idea.features {
                println!("  • {feature}");
            }
            println!();
        }
        if !idea.suggested_tech.is_empty() {
            println!("Suggested technologies: {}\n", idea.suggested_tech.join(", "));
        }
    }
    if let Some(text) = panel.details.value() {
        println!("Detailed guide:\n");
        // The project view recognizes only two heading depths.
        terminal::print_nodes(&render_with(
            text,
            "project-details",
            RenderOptions { heading_depth: 2 },
        ));
    }
    if let Some(message) = panel.details.error() {
        terminal::note_error(message);
    }
    if let Some(items) = panel.suggestions.value() {
        println!("Further suggestions:");
        for item in items {
            println!("  • {item}");
        }
    }
    if let Some(message) = panel.suggestions.error() {
        terminal::note_error(message);
    }
    Ok(())
}
