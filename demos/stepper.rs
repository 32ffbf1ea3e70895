use kmeans_stepper::{ClusterEngine, Command, ParamGuard, Snapshot};
use std::io::{self, BufRead, Write};

const COLUMNS: usize = 60;
const ROWS: usize = 30;

// A terminal stand-in for the graphical demo: type commands, watch the partition evolve.
//
//   init <points> <clusters>   generate a new dataset
//   assign                     assign every point to its nearest centroid
//   update                     move every centroid to the mean of its points
//   show                       redraw the canvas
//   quit
//
// Run with `RUST_LOG=debug` to follow what every pass does.
fn main() -> io::Result<()> {
    env_logger::init();

    let canvas = ClusterEngine::<f64>::params()
        .check()
        .expect("default canvas is valid");
    let (width, height) = (canvas.width(), canvas.height());
    let mut engine = ClusterEngine::<f64>::from_entropy(canvas);
    engine.apply(Command::Initialize {
        n_points: 100,
        n_clusters: 3,
    });
    draw(&engine.snapshot(), width, height);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "show" => {}
            text => match text.parse::<Command>() {
                Ok(command) => engine.apply(command),
                // Malformed input leaves the previous state on screen
                Err(err) => {
                    eprintln!("{}", err);
                    continue;
                }
            },
        }
        draw(&engine.snapshot(), width, height);
    }
    Ok(())
}

fn draw(snapshot: &Snapshot<f64>, width: u32, height: u32) {
    let mut grid = vec![vec![' '; COLUMNS]; ROWS];
    let cell = |x: f64, y: f64| {
        let column = (x / f64::from(width) * COLUMNS as f64) as usize;
        let row = (y / f64::from(height) * ROWS as f64) as usize;
        (row.min(ROWS - 1), column.min(COLUMNS - 1))
    };

    for (point, &label) in snapshot.points.iter().zip(snapshot.labels.iter()) {
        let (row, column) = cell(point.x, point.y);
        grid[row][column] = match label {
            None => '.',
            Some(cluster) => std::char::from_digit((cluster % 36) as u32, 36).unwrap_or('?'),
        };
    }
    for centroid in &snapshot.centroids {
        let (row, column) = cell(centroid.x, centroid.y);
        grid[row][column] = '#';
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let border = "-".repeat(COLUMNS);
    let _ = writeln!(out, "+{}+", border);
    for row in grid {
        let _ = writeln!(out, "|{}|", row.into_iter().collect::<String>());
    }
    let _ = writeln!(out, "+{}+", border);
    let _ = writeln!(
        out,
        "{:?}: {} points, {} centroids",
        snapshot.phase,
        snapshot.points.len(),
        snapshot.centroids.len()
    );
    for (j, centroid) in snapshot.centroids.iter().enumerate() {
        let members = snapshot.labels.iter().filter(|&&l| l == Some(j)).count();
        let _ = writeln!(
            out,
            "  cluster {}: centroid ({}, {}), {} points",
            j, centroid.x, centroid.y, members
        );
    }
}
