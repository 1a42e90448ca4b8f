//! Terminal front end for the prompt stash.
//!
//! # Responsibility
//! - Translate command-line arguments into controller events.
//! - Draw controller surfaces as plain text.
//! - Ask for confirmation before deletes unless `--yes` is given.
//!
//! # Invariants
//! - Read-only commands never write the slots back.

use clap::{Parser, Subcommand};
use log::info;
use promptstash_core::{
    core_version, init_logging, render_text, Controller, Outcome, PromptStore, SlotRepository,
    SqliteKeyValueStore, StashConfig, UiEvent,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

type StashController = Controller<SqliteKeyValueStore>;

/// promptstash - keep reusable prompts grouped by project
#[derive(Parser, Debug)]
#[command(name = "promptstash")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List prompts in the selected view
    #[command(alias = "ls")]
    List {
        /// Show every prompt (default)
        #[arg(long, conflicts_with_all = ["unassigned", "project"])]
        all: bool,

        /// Show prompts without a project
        #[arg(long, conflicts_with = "project")]
        unassigned: bool,

        /// Show prompts of one project
        #[arg(long, value_name = "ID")]
        project: Option<String>,
    },

    /// List projects with their prompt counts
    Projects,

    /// Add a prompt
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Project id to assign the prompt to
        #[arg(long, value_name = "ID")]
        project: Option<String>,
    },

    /// Add a project
    AddProject {
        name: String,

        /// Palette color, e.g. #3B82F6
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a prompt by id
    DeletePrompt {
        id: String,

        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete a project by id and unassign its prompts
    DeleteProject {
        id: String,

        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the version
    Version,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Projects => "projects",
            Self::Add { .. } => "add",
            Self::AddProject { .. } => "add-project",
            Self::DeletePrompt { .. } => "delete-prompt",
            Self::DeleteProject { .. } => "delete-project",
            Self::Version => "version",
        }
    }

    fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add { .. }
                | Self::AddProject { .. }
                | Self::DeletePrompt { .. }
                | Self::DeleteProject { .. }
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    if command == Command::Version {
        println!("promptstash {}", core_version());
        return Ok(());
    }

    let config = StashConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level.as_str(), log_dir).map_err(|err| err.to_string())?;
    }

    let backend = SqliteKeyValueStore::open(&config.db_path)
        .map_err(|err| format!("cannot open {}: {err}", config.db_path.display()))?;
    let mut controller = Controller::new(PromptStore::load(SlotRepository::new(backend)));
    info!(
        "event=cli_command module=cli status=start command={}",
        command.name()
    );

    let mutates = command.mutates();
    let result = match command {
        Command::List {
            unassigned,
            project,
            ..
        } => {
            let filter = match (unassigned, project) {
                (_, Some(project_id)) => project_id,
                (true, None) => "unassigned".to_string(),
                (false, None) => "all".to_string(),
            };
            list(&mut controller, filter)
        }
        Command::Projects => {
            print_projects(&controller);
            Ok(())
        }
        Command::Add {
            title,
            content,
            tags,
            project,
        } => add_prompt(&mut controller, title, content, tags, project),
        Command::AddProject { name, color } => add_project(&mut controller, name, color),
        Command::DeletePrompt { id, yes } => {
            delete(&mut controller, id, yes, UiEvent::RequestDeletePrompt)
        }
        Command::DeleteProject { id, yes } => {
            delete(&mut controller, id, yes, UiEvent::RequestDeleteProject)
        }
        Command::Version => Ok(()),
    };

    if mutates {
        controller
            .shutdown()
            .map_err(|err| format!("failed to save stash: {err}"))?;
    }
    result
}

fn list(controller: &mut StashController, filter: String) -> Result<(), String> {
    dispatch(controller, UiEvent::SelectFilter(filter))?;

    let surfaces = controller.surfaces();
    println!(
        "{} ({})\n",
        surfaces.current_title.text().unwrap_or_default(),
        surfaces.current_count.text().unwrap_or_default()
    );
    if surfaces.no_prompts.is_visible() {
        println!("{}", surfaces.no_prompts.message());
    } else {
        print!("{}", render_text(surfaces.prompts_list.nodes()));
    }
    Ok(())
}

fn print_projects(controller: &StashController) {
    let surfaces = controller.surfaces();
    println!(
        "All prompts: {}    Unassigned: {}\n",
        surfaces.all_count.text().unwrap_or_default(),
        surfaces.unassigned_count.text().unwrap_or_default()
    );
    print!("{}", render_text(surfaces.projects_list.nodes()));
}

fn add_prompt(
    controller: &mut StashController,
    title: String,
    content: String,
    tags: Option<String>,
    project: Option<String>,
) -> Result<(), String> {
    if let Some(project_id) = project.as_deref() {
        if controller.store().find_project(project_id).is_none() {
            return Err(format!("no project with id `{project_id}`"));
        }
    }

    let form = controller.prompt_form_mut();
    form.title = title;
    form.content = content;
    form.tags = tags.unwrap_or_default();
    form.project = project.unwrap_or_default();

    let created_before = controller.store().prompts().len();
    dispatch(controller, UiEvent::AddPrompt)?;
    let error = &controller.surfaces().prompt_form_error;
    if error.is_visible() {
        return Err(error.message().to_string());
    }
    if let Some(prompt) = controller.store().prompts().get(created_before) {
        println!("added prompt {}", prompt.id);
    }
    Ok(())
}

fn add_project(
    controller: &mut StashController,
    name: String,
    color: Option<String>,
) -> Result<(), String> {
    dispatch(controller, UiEvent::OpenProjectForm)?;
    controller.project_form_mut().name = name;
    if let Some(color) = color {
        if dispatch(controller, UiEvent::SelectColor(color.clone()))? == Outcome::Ignored {
            return Err(format!("color `{color}` is not in the project palette"));
        }
    }

    dispatch(controller, UiEvent::CreateProject)?;
    let error = &controller.surfaces().project_form_error;
    if error.is_visible() {
        return Err(error.message().to_string());
    }
    if let Some(project) = controller.store().projects().last() {
        println!("added project {} ({})", project.id, project.name);
    }
    Ok(())
}

fn delete(
    controller: &mut StashController,
    id: String,
    assume_yes: bool,
    request: fn(String) -> UiEvent,
) -> Result<(), String> {
    if dispatch(controller, request(id.clone()))? != Outcome::Staged {
        return Err(format!("nothing to delete for id `{id}`"));
    }

    let confirmed = assume_yes
        || ask_confirmation(controller.surfaces().delete_dialog.message())
            .map_err(|err| format!("failed to read confirmation: {err}"))?;
    let event = if confirmed {
        UiEvent::ConfirmDelete
    } else {
        UiEvent::CancelDelete
    };
    match dispatch(controller, event)? {
        Outcome::Rendered => println!("deleted {id}"),
        _ => println!("cancelled"),
    }
    Ok(())
}

fn dispatch(controller: &mut StashController, event: UiEvent) -> Result<Outcome, String> {
    controller.dispatch(event).map_err(|err| err.to_string())
}

fn ask_confirmation(message: &str) -> io::Result<bool> {
    print!("{message} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
