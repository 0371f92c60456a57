use std::error::Error;
use std::io::{self, Write};

use serde::Serialize;
use sll::{insert_all_at_start, invert, slice_at, write_list, List};

use crate::config::{Config, Scenario};

#[derive(Serialize)]
struct Outcome<'a> {
    head: &'a List,
    tail: &'a List,
}

/// Replays the scenario, printing each list as it takes shape.
pub fn run<W: Write>(config: Config, out: &mut W) -> Result<(), Box<dyn Error>> {
    let Config {
        scenario,
        diagram,
        json,
    } = config;
    let Scenario {
        mut primary,
        secondary,
        slice_index,
    } = scenario;

    show(out, &primary, diagram)?;
    show(out, &secondary, diagram)?;

    insert_all_at_start(&mut primary, secondary);
    if !primary.is_empty() {
        invert(&mut primary, 0)?;
    }
    show(out, &primary, diagram)?;

    let tail = slice_at(&mut primary, slice_index)?;
    log::debug!("Split into {} and {} nodes", primary.len(), tail.len());
    show(out, &primary, diagram)?;
    show(out, &tail, diagram)?;

    if json {
        let outcome = Outcome {
            head: &primary,
            tail: &tail,
        };
        writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
    }
    Ok(())
}

fn show<W: Write>(out: &mut W, list: &List, diagram: Option<usize>) -> io::Result<()> {
    write_list(out, list)?;
    match diagram {
        Some(width) if !list.is_empty() => writeln!(out, "{}", list.diagram(width)),
        _ => Ok(()),
    }
}
