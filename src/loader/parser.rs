use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::domain::request::Request;
use crate::error::{Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are automatically converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let data = fs::read_to_string(file_path)?;

    let parsed_data: T = serde_json::from_str(&data)?;

    Ok(parsed_data)
}

/// Loads a traffic scenario folder into per-step request lists.
///
/// The folder holds one file per time step (`0.txt` .. `<iterations-1>.txt`),
/// each line `start dest bandwidth_gbps duration` with whitespace-separated
/// numeric fields; the arrival time of a request is the index of its file.
/// Every request is validated while reading, so the simulation never sees
/// malformed data. A missing folder or step file is a hard error.
pub fn load_scenario(data_dir: &Path, scenario: &str, iterations: usize, n_nodes: usize) -> Result<Vec<Vec<Request>>> {
    let scenario_dir = data_dir.join(scenario);

    if !scenario_dir.is_dir() {
        log::error!("Data directory does not exist: {}", scenario_dir.display());
        return Err(Error::ScenarioNotFound(scenario_dir));
    }

    log::info!("Reading input files from '{}'", scenario_dir.display());
    let started = Instant::now();

    let mut traffic: Vec<Vec<Request>> = Vec::with_capacity(iterations);
    let mut request_count: usize = 0;
    let mut offered_gbps_steps: f64 = 0.0;

    for step in 0..iterations {
        let file_path = scenario_dir.join(format!("{}.txt", step));
        log::debug!("Reading file {}", file_path.display());

        let contents = fs::read_to_string(&file_path)?;
        let mut requests: Vec<Request> = Vec::new();

        for (line_index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let request = parse_traffic_line(line, &file_path, line_index + 1, step as u64, n_nodes)?;
            offered_gbps_steps += request.size_gbps * request.duration as f64;
            requests.push(request);
            request_count += 1;
        }

        traffic.push(requests);
    }

    log::info!("Reading complete in {:.3} seconds", started.elapsed().as_secs_f64());
    log::info!("Number of requests: {}", request_count);
    log::debug!("Total offered data: {} Gbps-steps", offered_gbps_steps);

    Ok(traffic)
}

/// Parses one `start dest bandwidth_gbps duration` line.
///
/// All four fields are read as floats (the data files carry node ids and
/// durations with a decimal point), then the integer-valued ones are
/// converted with an exactness check.
fn parse_traffic_line(line: &str, file_path: &Path, line_no: usize, arrival_time: u64, n_nodes: usize) -> Result<Request> {
    let malformed = |reason: String| Error::MalformedTrafficLine { file: file_path.display().to_string(), line_no, reason };

    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() != 4 {
        return Err(malformed(format!("expected 4 fields, got {}", fields.len())));
    }

    let mut values = [0.0f64; 4];

    for (i, field) in fields.iter().enumerate() {
        values[i] = field.parse::<f64>().map_err(|_| malformed(format!("'{}' is not a number", field)))?;
    }

    let start = as_exact_integer(values[0]).ok_or_else(|| malformed(format!("start node '{}' is not an integer", fields[0])))?;
    let end = as_exact_integer(values[1]).ok_or_else(|| malformed(format!("dest node '{}' is not an integer", fields[1])))?;
    let duration = as_exact_integer(values[3]).ok_or_else(|| malformed(format!("duration '{}' is not an integer", fields[3])))?;

    Request::new(start as usize, end as usize, values[2], duration, arrival_time, n_nodes)
}

fn as_exact_integer(value: f64) -> Option<u64> {
    if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 { Some(value as u64) } else { None }
}
