use polyfit_rs::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    expected: Vec<f64>,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum InputData {
    OneD {
        x: Vec<f64>,
        y: Vec<f64>,
    },
    TwoD {
        rows: usize,
        cols: usize,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
    },
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    order_x: usize,
    #[serde(default)]
    order_y: usize,
    #[serde(default)]
    householder: bool,
    #[serde(default)]
    raw: bool,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    coefficients: Vec<f64>,
    max_abs_error: f64,
    error: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let input_dir = manifest.join("cases");
    let output_dir = manifest.join("../output/polyfit_rs");

    if !input_dir.exists() {
        eprintln!("Input directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(&input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut worst = 0.0f64;
    for path in &paths {
        let error = process_file(path, &output_dir)?;
        worst = worst.max(error);
    }

    println!("{} cases, worst coefficient error {:e}", paths.len(), worst);
    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<f64, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let fitter = PolyFitBuilder::new()
        .conditioning(if data.params.raw { Raw } else { Normalized })
        .solve_method(if data.params.householder {
            Householder
        } else {
            NormalEquations
        })
        .build()?;

    let fitted = match &data.input {
        InputData::OneD { x, y } => fitter
            .fit(x, y, data.params.order_x)
            .map(|p| p.into_coefficients()),
        InputData::TwoD {
            rows,
            cols,
            x,
            y,
            z,
        } => {
            let gx = GridView::new(x, *rows, *cols)?;
            let gy = GridView::new(y, *rows, *cols)?;
            let gz = GridView::new(z, *rows, *cols)?;
            fitter
                .fit_2d(&gx, &gy, &gz, data.params.order_x, data.params.order_y)
                .map(|p| p.coefficients().to_vec())
        }
    };

    match fitted {
        Ok(coefficients) => {
            data.result.max_abs_error = coefficients
                .iter()
                .zip(&data.expected)
                .fold(0.0, |acc: f64, (got, want)| acc.max((got - want).abs()));
            data.result.coefficients = coefficients;
            println!(
                "{:<28} max |error| = {:e}",
                data.name, data.result.max_abs_error
            );
        }
        Err(e) => {
            println!("{:<28} failed: {}", data.name, e);
            data.result.max_abs_error = f64::INFINITY;
            data.result.error = Some(e.to_string());
        }
    }

    let file_name = input_path.file_name().ok_or("case path has no file name")?;
    let output_path = output_dir.join(file_name);
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(data.result.max_abs_error)
}
