mod app;
mod catalog;
mod cli;
mod config;
mod db;
mod error;
mod logic;
mod models;
mod ui;

use app::{App, Screen};
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use db::Database;
use error::Result;
use logic::{actionable_steps, classify, detect_season};
use models::Tier;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{
    CalendarScreen, CropsScreen, DashboardScreen, RecommendationsScreen, SettingsScreen,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match &cli.command {
        Some(Commands::Init) => {
            let (_, path) = Config::setup_interactive()?;
            println!("Setup complete. Config written to {}", path.display());
            return Ok(());
        }
        Some(Commands::Check) => {
            return run_check(&cli);
        }
        Some(Commands::Advise { month, region }) => {
            return run_advise(&cli, *month, region.clone());
        }
        None => {}
    }

    // Load configuration, prompting on first run
    let config = if Config::exists(cli.config.as_ref()) {
        Config::load(cli.config.clone())?
    } else {
        let (config, _) = Config::setup_interactive()?;
        config
    };

    // Load catalog and preference store
    let catalog = Catalog::load()?;
    let db = Database::open(cli.data_dir.as_ref())?;

    let mut app = App::new(config, db, catalog)?;
    app.set_status(&format!(
        "{} season - {} crops in catalog",
        app.season.label(),
        app.catalog.len()
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_check(cli: &Cli) -> Result<()> {
    let mut ok = true;

    match Config::load(cli.config.clone()) {
        Ok(config) => println!(
            "Config: OK ({}, region {})",
            config.farm.name, config.farm.region
        ),
        Err(e) => {
            println!("Config: FAILED ({})", e);
            ok = false;
        }
    }

    match Catalog::load() {
        Ok(catalog) => println!("Catalog: OK ({} crops)", catalog.len()),
        Err(e) => {
            println!("Catalog: FAILED ({})", e);
            ok = false;
        }
    }

    match Database::open(cli.data_dir.as_ref()) {
        Ok(db) => {
            let alerts = db.alerts_enabled()?;
            println!(
                "Store: OK ({}, alerts {})",
                db.path().display(),
                if alerts { "on" } else { "off" }
            );
        }
        Err(e) => {
            println!("Store: FAILED ({})", e);
            ok = false;
        }
    }

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn run_advise(cli: &Cli, month: Option<u32>, region: Option<String>) -> Result<()> {
    let catalog = Catalog::load()?;

    let region = match region {
        Some(r) => r,
        None => Config::load(cli.config.clone())?.farm.region,
    };

    // CLI months are 1-based (clap rejects values outside 1-12); the
    // engine takes 0-based indices
    let month = match month {
        Some(m) => m - 1,
        None => {
            use chrono::Datelike;
            chrono::Local::now().month0()
        }
    };

    let season = detect_season(month);
    let advice = classify(catalog.crops(), season, &region);

    println!(
        "{} ({}) - {} - region: {}",
        season.label(),
        season.phase(),
        ui::components::month_name(month),
        region
    );
    println!();

    for tier in Tier::all() {
        let list = advice.tier(*tier);
        println!("{} {} ({})", tier.symbol(), tier.as_str(), list.len());
        for item in list {
            let plan = actionable_steps(&item.crop, month);
            println!(
                "  {:<16} demand {:<6} risk {:<6} stage {}",
                item.crop.name,
                item.market_demand.as_str(),
                item.risk_level.as_str(),
                plan.stage.as_str()
            );
            println!("                   {}", item.reason);
        }
        println!();
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    error::AgriOpsError: From<B::Error>,
{
    loop {
        // Draw UI
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Dashboard => {
                    let screen = DashboardScreen::new(
                        &app.config.farm.name,
                        &app.region,
                        app.month,
                        app.season,
                        &app.advice,
                        app.active_alerts(),
                    )
                    .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Recommendations => {
                    let screen = RecommendationsScreen::new(&app.advice)
                        .with_tier(app.recommendations_state.tier)
                        .with_selection(app.recommendations_state.selected_index);
                    f.render_widget(screen, area);
                }
                Screen::Calendar => {
                    let screen = CalendarScreen::new(app.catalog.crops(), app.month)
                        .with_selection(app.calendar_state.selected_index);
                    f.render_widget(screen, area);
                }
                Screen::Crops => {
                    let screen = CropsScreen::new(app.catalog.crops(), app.month)
                        .with_selection(app.crops_state.selected_index);
                    f.render_widget(screen, area);
                }
                Screen::Settings => {
                    let screen = SettingsScreen::new(&app.region, app.alerts_enabled)
                        .with_focus(app.settings_state.focused_field);
                    f.render_widget(screen, area);
                }
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Global key handling
                match key.code {
                    KeyCode::Char('q') => {
                        app.quit();
                    }
                    KeyCode::Esc => {
                        app.switch_screen(Screen::Dashboard);
                    }
                    KeyCode::Char(c) => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => {
                        handle_screen_input(app, key.code);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Dashboard => handle_dashboard_input(app, code),
        Screen::Recommendations => handle_recommendations_input(app, code),
        Screen::Calendar => handle_calendar_input(app, code),
        Screen::Crops => handle_crops_input(app, code),
        Screen::Settings => handle_settings_input(app, code),
    }
}

fn handle_dashboard_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left => app.prev_month(),
        KeyCode::Right => app.next_month(),
        _ => {}
    }
}

fn handle_recommendations_input(app: &mut App, code: KeyCode) {
    let count = app.current_tier_list().len();
    match code {
        KeyCode::Up => app.recommendations_state.prev(),
        KeyCode::Down => app.recommendations_state.next(count),
        KeyCode::Tab => app.recommendations_state.cycle_tier(),
        KeyCode::Left => app.prev_month(),
        KeyCode::Right => app.next_month(),
        _ => {}
    }
}

fn handle_calendar_input(app: &mut App, code: KeyCode) {
    let count = app.catalog.len();
    match code {
        KeyCode::Up => app.calendar_state.prev(),
        KeyCode::Down => app.calendar_state.next(count),
        KeyCode::Left => app.prev_month(),
        KeyCode::Right => app.next_month(),
        _ => {}
    }
}

fn handle_crops_input(app: &mut App, code: KeyCode) {
    let count = app.catalog.len();
    match code {
        KeyCode::Up => app.crops_state.prev(),
        KeyCode::Down => app.crops_state.next(count),
        KeyCode::Left => app.prev_month(),
        KeyCode::Right => app.next_month(),
        _ => {}
    }
}

fn handle_settings_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up => app.settings_state.prev_field(),
        KeyCode::Down | KeyCode::Tab => app.settings_state.next_field(),
        KeyCode::Left => match app.settings_state.focused_field {
            ui::screens::SettingsField::Region => app.cycle_region(false),
            ui::screens::SettingsField::Alerts => app.toggle_alerts(),
        },
        KeyCode::Right | KeyCode::Enter => match app.settings_state.focused_field {
            ui::screens::SettingsField::Region => app.cycle_region(true),
            ui::screens::SettingsField::Alerts => app.toggle_alerts(),
        },
        _ => {}
    }
}
