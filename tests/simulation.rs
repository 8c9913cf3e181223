/*!
 * Simulation tests entry point
 */

#[path = "simulation/scenario_test.rs"]
mod scenario_test;

#[path = "simulation/observer_test.rs"]
mod observer_test;

#[path = "simulation/property_test.rs"]
mod property_test;
