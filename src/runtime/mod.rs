/*!
 * Runtime Module
 * Wall-clock driver for the simulation and the console command grammar
 */

pub mod console;
pub mod task;

pub use console::ConsoleCommand;
pub use task::{SimulationCommand, SimulationTask};
