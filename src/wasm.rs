use wasm_bindgen::prelude::*;

/// Run a simulation from a JSON config and return the report record
#[wasm_bindgen]
pub fn run_simulation(config_json: &str) -> Result<JsValue, JsValue> {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    let config = crate::Config::from_json_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("Config parse error: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&format!("Config error: {}", e)))?;

    let simulator = crate::Simulator::new(config)
        .map_err(|e| JsValue::from_str(&format!("Simulator error: {}", e)))?;

    let record = simulator.run().to_record();
    Ok(serde_wasm_bindgen::to_value(&record)?)
}

/// Run a single named policy over a JSON process array.
///
/// This is the entry point for front ends that generate their own workload.
/// A `null` or missing array is reported as an invalid workload.
#[wasm_bindgen]
pub fn run_policy(
    policy: &str,
    processes_json: &str,
    quantum: u32,
    mlfq_quanta: Vec<u32>,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let scheduler = crate::config::SchedulerConfig {
        quantum: quantum.into(),
        mlfq_quanta: mlfq_quanta.into_iter().map(u64::from).collect(),
        ..Default::default()
    };
    let policy = crate::SchedulingPolicy::from_name(policy, &scheduler)
        .map_err(|e| JsValue::from_str(&e))?;
    let processes = crate::process::workload_from_json(processes_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let entries = policy
        .simulate(&processes)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&entries)?)
}
