pub mod parser;
pub mod runner;
pub mod types;
pub mod units;

pub use parser::{logical_drive_matches, parse_controller_slots, parse_logical_drives};
pub use runner::{controller_list_args, logical_drive_args, CommandRunner, SsacliRunner};
pub use types::{ControllerScan, ControllerSlot, DriveSample, LogicalDriveRecord};
