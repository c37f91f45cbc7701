//! Wheel of Life - interactive terminal assessment.
//!
//! Walks through each category, then offers PNG/SVG/PDF exports and
//! submission to a running server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing_subscriber::EnvFilter;

use wheel_of_life::adapters::{
    HttpSubmissionClient, PandocPdfRenderer, PngRadarRenderer, SvgRadarRenderer,
};
use wheel_of_life::application::{AssessmentController, AssessmentError};
use wheel_of_life::domain::submission::ClientDetails;
use wheel_of_life::domain::wheel::{CategorySet, ChartTheme, StepView, ThemeName};

#[derive(Parser, Debug)]
#[command(name = "wheel", about = "Rate each area of your life from 0 to 10")]
struct Args {
    /// Submission server root, e.g. http://localhost:3001
    #[arg(long, env = "WHEEL_OF_LIFE_SERVER_URL")]
    server: Option<String>,

    /// Chart theme (standard or bold)
    #[arg(long, default_value = "standard")]
    theme: ThemeName,

    /// Directory for exported files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Path to the pandoc binary
    #[arg(long, env = "WHEEL_OF_LIFE__DOCUMENT__PANDOC_PATH")]
    pandoc: Option<String>,

    /// Custom comma-separated categories instead of the standard eight
    #[arg(long, value_delimiter = ',')]
    categories: Vec<String>,
}

enum StepAction {
    Select(i64),
    Next,
    Back,
    Submit,
    Reset,
    Quit,
}

enum ResultAction {
    SavePng,
    SaveSvg,
    SavePdf,
    Send,
    ToggleTheme,
    StartOver,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let categories = if args.categories.is_empty() {
        CategorySet::canonical()
    } else {
        CategorySet::from_names(args.categories.iter().map(|c| c.trim()))
            .context("invalid --categories")?
    };

    let mut controller =
        AssessmentController::new(categories, Arc::new(PngRadarRenderer::default()))
            .with_theme(ChartTheme::named(args.theme));

    let term = Term::stdout();
    term.clear_screen()?;
    println!();
    println!("{}", style("  Wheel of Life").cyan().bold());
    println!(
        "  {}",
        style("Rate each area from 0 (very unsatisfied) to 10 (fully satisfied)").dim()
    );

    loop {
        if !run_steps(&mut controller)? {
            return Ok(());
        }
        if !run_results(&mut controller, &args).await? {
            return Ok(());
        }
        controller.reset();
    }
}

/// Returns false when the user quits.
fn run_steps(controller: &mut AssessmentController) -> Result<bool> {
    loop {
        let view = controller.view();
        print_step(&view);

        match choose_step_action(&view)? {
            StepAction::Select(value) => {
                if let Err(e) = controller.select_value(value) {
                    println!("  {} {}", style("✗").red(), e);
                }
            }
            StepAction::Next => report_refusal(controller.advance().map(|_| ())),
            StepAction::Back => report_refusal(controller.retreat().map(|_| ())),
            StepAction::Reset => controller.reset(),
            StepAction::Quit => return Ok(false),
            StepAction::Submit => match controller.submit() {
                Ok(submitted) => {
                    println!();
                    println!("  {} Assessment complete", style("✓").green().bold());
                    for (label, score) in submitted.snapshot.entries() {
                        println!("    {:<24} {}", label, style(score).cyan());
                    }
                    if let Some(err) = submitted.chart_error {
                        println!("  {} {}", style("!").yellow(), err);
                    }
                    return Ok(true);
                }
                Err(e) => println!("  {} {}", style("✗").red(), e),
            },
        }
    }
}

fn print_step(view: &StepView) {
    println!();
    println!(
        "  {} {}",
        style(format!("Step {}/{}", view.step_number, view.step_total)).dim(),
        style(&view.label).bold()
    );
    if !view.subtitle.is_empty() {
        println!("  {}", style(&view.subtitle).dim());
    }
}

fn choose_step_action(view: &StepView) -> Result<StepAction> {
    let mut items: Vec<String> = view
        .scale
        .iter()
        .map(|o| {
            if o.selected {
                format!("● {}", o.caption())
            } else {
                format!("  {}", o.caption())
            }
        })
        .collect();
    let mut actions: Vec<StepAction> = view
        .scale
        .iter()
        .map(|o| StepAction::Select(i64::from(o.score.value())))
        .collect();

    if view.next_visible {
        items.push(disabled_unless("→ Next", view.next_enabled));
        actions.push(StepAction::Next);
    }
    if view.submit_visible {
        items.push(disabled_unless("✓ Submit", view.submit_enabled));
        actions.push(StepAction::Submit);
    }
    if view.back_enabled {
        items.push("← Back".to_string());
        actions.push(StepAction::Back);
    }
    items.push("↺ Reset".to_string());
    actions.push(StepAction::Reset);
    items.push("Quit".to_string());
    actions.push(StepAction::Quit);

    let default = view
        .selected()
        .map(|s| usize::from(s.value()))
        .unwrap_or(0);
    let index = Select::with_theme(&ColorfulTheme::default())
        .items(&items)
        .default(default)
        .interact()?;

    Ok(actions.swap_remove(index))
}

fn disabled_unless(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        format!("{} (answer first)", label)
    }
}

fn report_refusal(result: Result<(), wheel_of_life::domain::wheel::WizardError>) {
    if let Err(e) = result {
        println!("  {} {}", style("·").dim(), style(e).dim());
    }
}

/// Returns false when the user quits.
async fn run_results(controller: &mut AssessmentController, args: &Args) -> Result<bool> {
    loop {
        let mut items = vec!["Save chart as PNG", "Save chart as SVG", "Save PDF report"];
        let mut actions = vec![ResultAction::SavePng, ResultAction::SaveSvg, ResultAction::SavePdf];
        if args.server.is_some() {
            items.push("Send to coach");
            actions.push(ResultAction::Send);
        }
        items.extend(["Toggle chart theme", "Start over", "Quit"]);
        actions.extend([ResultAction::ToggleTheme, ResultAction::StartOver, ResultAction::Quit]);

        println!();
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("  What next?")
            .items(&items)
            .default(0)
            .interact()?;

        let outcome = match actions.swap_remove(index) {
            ResultAction::SavePng => save_png(controller, args),
            ResultAction::SaveSvg => save_svg(controller, args),
            ResultAction::SavePdf => save_pdf(controller, args).await,
            ResultAction::Send => send(controller, args).await,
            ResultAction::ToggleTheme => {
                let next = ChartTheme::named(controller.theme().name.toggled());
                controller
                    .set_theme(next)
                    .map(|_| format!("Theme: {}", next.name))
                    .map_err(anyhow::Error::from)
            }
            ResultAction::StartOver => return Ok(true),
            ResultAction::Quit => return Ok(false),
        };

        match outcome {
            Ok(message) => println!("  {} {}", style("✓").green(), message),
            Err(e) => println!("  {} {}", style("✗").red(), e),
        }
    }
}

fn save_png(controller: &AssessmentController, args: &Args) -> Result<String> {
    let png = controller.export_png()?;
    let path = args.out_dir.join("wheel-of-life.png");
    std::fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
    Ok(format!("Saved {}", path.display()))
}

fn save_svg(controller: &AssessmentController, args: &Args) -> Result<String> {
    let snapshot = controller.submitted().ok_or(AssessmentError::NotSubmitted)?;
    let svg = SvgRadarRenderer::default().render(snapshot, controller.theme());
    let path = args.out_dir.join("wheel-of-life.svg");
    std::fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
    Ok(format!("Saved {}", path.display()))
}

async fn save_pdf(controller: &AssessmentController, args: &Args) -> Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("  Client name (optional)")
        .allow_empty(true)
        .interact_text()?;
    let name = Some(name.trim().to_string()).filter(|n| !n.is_empty());

    let mut renderer = PandocPdfRenderer::new();
    if let Some(path) = &args.pandoc {
        renderer = renderer.with_pandoc_path(path);
    }
    let pdf = controller.export_pdf(&renderer, name).await?;
    let path = args.out_dir.join("wheel-of-life.pdf");
    tokio::fs::write(&path, pdf)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(format!("Saved {}", path.display()))
}

async fn send(controller: &AssessmentController, args: &Args) -> Result<String> {
    let Some(server) = &args.server else {
        anyhow::bail!("no server configured");
    };
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("  Your name (optional)")
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("  Your email (optional)")
        .allow_empty(true)
        .interact_text()?;

    let client = HttpSubmissionClient::new(server.as_str());
    let id = controller
        .send_to_remote(&client, ClientDetails::new(Some(email), Some(name)))
        .await?;
    Ok(format!("Sent (submission #{})", id))
}
