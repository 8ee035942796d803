//! Report where the poles of a grid file are and what they hold.

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    deserialise::load_grid,
    patching::{locate_poles, Poles},
};

pub fn poles(input: &Path) -> Result<Poles> {
    let grid = load_grid(input)?;
    let header = &grid.header;
    let layout = header.layout();

    println!("{}:", input.display());
    println!("{} xnodes and {} ynodes", header.xnodes, header.ynodes);
    println!("X values are [{}, {}]", header.xmin, header.xmax);
    println!("Y values are [{}, {}]", header.ymin, header.ymax);
    println!("Z values are [{}, {}]", header.zmin, header.zmax);

    match layout.partial_width() {
        0 => println!("No partial lines in this grid file."),
        n => println!("Partial lines have {} value(s) on them.", n),
    }
    println!(
        "Each latitude occupies {} lines in the file.",
        layout.lines_per_row()
    );

    let poles = locate_poles(&grid)
        .with_context(|| format!("locating poles in `{}`", input.display()))?;
    for (name, pole) in [("South", &poles.south), ("North", &poles.north)] {
        println!(
            "{} pole = {}, in position {} of line {} (column {}).",
            name, pole.value, pole.position, pole.line, poles.column
        );
    }

    Ok(poles)
}
