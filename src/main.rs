// Entry point and menu flow.
//
// - Option [1] builds a district choropleth for one crop.
// - Option [2] builds a bar-race series for a crop category or a custom set.
// - Option [3] builds the rainfall choropleth, then offers the crop map.
// Every submission re-reads its inputs; nothing is cached between requests.
mod aggregate;
mod categories;
mod config;
mod error;
mod forms;
mod loader;
mod output;
mod reconcile;
mod selector;
mod tasks;
mod types;
mod util;

use categories::CUSTOM_PICKERS;
use clap::Parser;
use config::{Args, DataPaths};
use error::DashError;
use forms::PlotType;
use std::io::{self, Write};
use tasks::Context;

/// Print `prompt` and read one trimmed line. `None` on end of input.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

fn print_options(options: &[String]) {
    for (row, items) in options.chunks(3).enumerate() {
        let line: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, name)| format!("[{:>2}] {:<28}", row * 3 + i + 1, name))
            .collect();
        println!("{}", line.join(" "));
    }
}

/// Keep asking until the answer names one of `options`.
fn prompt_pick(label: &str, options: &[String]) -> Option<String> {
    loop {
        let input = read_line(&format!("{} (number or name, Enter for {:?}): ", label, options.first()?))?;
        match forms::resolve_pick(&input, options) {
            Some(pick) => return Some(pick),
            None => println!("Invalid choice. Please pick one of the listed options."),
        }
    }
}

/// Crop production map form, shared by options [1] and [3].
fn handle_crop_map(ctx: &Context, preview_rows: usize) -> Result<(), DashError> {
    let options = tasks::map_crop_options(ctx)?;
    println!("Crop Annual Production Map");
    println!("***These input fields are required***\n");
    print_options(&options);
    let Some(crop) = prompt_pick("Crop", &options) else {
        return Ok(());
    };
    println!("----");

    let map = tasks::crop_map(ctx, &crop)?;
    println!(
        "Color range: {} to {}",
        util::format_number(map.series.color_scale_bounds.min, 2),
        util::format_number(map.series.color_scale_bounds.max, 2)
    );
    output::preview_table_rows(&map.rows, preview_rows);
    println!("(Map series exported to {})\n", map.artifact.display());
    Ok(())
}

fn handle_production_trends(ctx: &Context, preview_rows: usize) -> Result<(), DashError> {
    let (records, report, choices) = tasks::production_table(ctx)?;
    println!("National Annual Crop Production");
    println!(
        "({} rows loaded, {} without production dropped)\n",
        util::format_count(report.total_rows),
        util::format_count(report.missing_production)
    );

    print_options(&forms::plot_type_options());
    let plot_type = loop {
        let Some(input) = read_line("Type of bar plot (Enter for cereals): ") else {
            return Ok(());
        };
        match forms::resolve_plot_type(&input) {
            Some(t) => break t,
            None => println!("Invalid choice. Please pick one of the listed options."),
        }
    };

    let mut picks = Vec::new();
    if plot_type == PlotType::Customize {
        println!("***Customize your plot***\n");
        let options = forms::picker_options(&choices);
        print_options(&options);
        for i in 1..=CUSTOM_PICKERS {
            let Some(pick) = prompt_pick(&format!("Crop{}", i), &options) else {
                return Ok(());
            };
            picks.push(pick);
        }
    }
    println!("----");

    let trends = tasks::production_trends(ctx, &records, &plot_type.into_request(picks))?;
    output::preview_table_rows(&trends.rows, preview_rows);
    println!(
        "(Bar race exported to {} and {})\n",
        trends.json_artifact.display(),
        trends.csv_artifact.display()
    );
    Ok(())
}

fn handle_rainfall_map(ctx: &Context, preview_rows: usize) -> Result<(), DashError> {
    println!("Annual Rainfall Data Map");
    let map = tasks::rainfall_map(ctx)?;
    println!(
        "Color range: {} to {}",
        util::format_number(map.series.color_scale_bounds.min, 2),
        util::format_number(map.series.color_scale_bounds.max, 2)
    );
    output::preview_table_rows(&map.rows, preview_rows);
    println!("(Rainfall series exported to {})", map.artifact.display());
    println!("----\n");
    handle_crop_map(ctx, preview_rows)
}

/// Report a failed request. Returns `false` when the session cannot go on.
fn report_error(err: DashError) -> bool {
    match err {
        DashError::Validation(msg) => {
            println!("Warning: {}\n", msg);
            true
        }
        e if e.ends_session() => {
            log::error!("{}", e);
            eprintln!("Fatal: {}", e);
            false
        }
        e => {
            log::warn!("request failed: {}", e);
            eprintln!("Error: {}\n", e);
            true
        }
    }
}

fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::debug!("starting with {:?}", args);
    let ctx = Context { paths: DataPaths::new(&args.data_dir), out_dir: args.out_dir.clone() };

    loop {
        println!("Main Menu:");
        println!("[1] Crop production map");
        println!("[2] Crop production trends");
        println!("[3] Rainfall and crop map");
        println!("[4] Exit\n");
        let Some(choice) = read_line("Enter choice: ") else {
            break;
        };
        let result = match choice.as_str() {
            "1" => handle_crop_map(&ctx, args.preview_rows),
            "2" => handle_production_trends(&ctx, args.preview_rows),
            "3" => handle_rainfall_map(&ctx, args.preview_rows),
            "4" => break,
            _ => {
                println!("Invalid choice. Please enter 1, 2, 3 or 4.\n");
                continue;
            }
        };
        if let Err(e) = result {
            if !report_error(e) {
                std::process::exit(1);
            }
        }
    }
    println!("Exiting the program.");
}
