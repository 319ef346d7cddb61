#[macro_use]
extern crate log;

use cascade::cascade;
use multi_selection::{Lifecycle, SavedStateRegistry, SelectionTracker, StateFile};
use std::{env, process, rc::Rc};

const DEFAULT_STATE: &str = "selection.json";

struct Args {
    state: String,
    reset: bool,
    items: Vec<i64>,
}

fn usage() -> ! {
    eprintln!("Usage: multi-selection [--state PATH] [--reset] [ID...]");
    process::exit(1)
}

fn parse_args() -> Args {
    let mut state = env::var("MULTI_SELECTION_STATE").ok();
    let mut reset = false;
    let mut items = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--state" => match args.next() {
                Some(path) => state = Some(path),
                None => usage(),
            },
            "--reset" => reset = true,
            "-h" | "--help" => usage(),
            _ => match arg.parse::<i64>() {
                Ok(item) => items.push(item),
                Err(err) => {
                    eprintln!("Invalid item '{}': {}", arg, err);
                    process::exit(1)
                }
            },
        }
    }

    Args {
        state: state.unwrap_or_else(|| DEFAULT_STATE.to_string()),
        reset,
        items,
    }
}

fn run(args: Args) -> Result<(), String> {
    let state_file = StateFile::open(&args.state);
    let saved = state_file
        .load()
        .map_err(|err| format!("Failed to load '{}': {}", args.state, err))?;

    let lifecycle = Lifecycle::new();
    let registry = cascade! {
        Rc::new(SavedStateRegistry::new());
        ..restore(saved);
    };
    let tracker = cascade! {
        SelectionTracker::new(&lifecycle, &registry)?;
        ..set_callbacks(Some(Rc::new(|restored: bool, from_user: bool| {
            debug!("Selection changed (restored: {}, from user: {})", restored, from_user);
        })));
    };
    lifecycle.dispatch_create();

    if args.reset {
        tracker.reset(true);
    }
    for &item in &args.items {
        tracker.toggle(item, true);
    }

    let selected = tracker.selected_items();
    println!(
        "{} selected: {}",
        selected.len(),
        selected
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    state_file
        .save(&registry.save())
        .map_err(|err| format!("Failed to save '{}': {}", args.state, err))
}

fn main() {
    env_logger::init();

    if let Err(err) = run(parse_args()) {
        error!("{}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}
