use crate::catalog::{Move, Waypoint};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_max_duration() -> f64 {
    120.0
}

pub fn default_lambda_penalty() -> f64 {
    0.9
}

pub fn default_time_tolerance() -> f64 {
    2.3
}

pub fn default_min_intermediate_moves() -> usize {
    5
}

pub fn default_max_expansions() -> usize {
    500_000
}

pub fn default_true() -> bool {
    true
}

pub fn default_moves() -> BTreeMap<String, Move> {
    [
        ("1-Rotation_handgun_object", Move::new(3.2)),
        ("4-Arms_opening", Move::new(10.0).requires(true).sets(true)),
        ("5-Union_arms", Move::new(7.08)),
        ("7-Move_forward", Move::new(3.1).requires(true).sets(true)),
        ("8-Move_backward", Move::new(3.1).requires(true).sets(true)),
        ("9-Diagonal_left", Move::new(2.82).requires(true).sets(true)),
        ("10-Diagonal_right", Move::new(2.42).requires(true).sets(true)),
        ("BlowKisses", Move::new(5.27)),
        ("AirGuitar", Move::new(4.18).requires(true).sets(true)),
        ("DanceMove", Move::new(6.16).requires(true).sets(true)),
        ("Rhythm", Move::new(3.61).requires(true).sets(true)),
        ("SprinklerL", Move::new(4.14).requires(true).sets(true)),
        ("SprinklerR", Move::new(4.17).requires(true).sets(true)),
        ("StandUp", Move::new(9.11).requires(false).sets(true)),
        ("Wave", Move::new(3.72)),
        ("Glory", Move::new(3.44)),
        ("Clap", Move::new(4.13)),
        ("Joy", Move::new(5.0)),
        ("Sit_Quick", Move::new(8.0).requires(true).sets(false)),
    ]
    .into_iter()
    .map(|(name, m)| (name.to_string(), m))
    .collect()
}

pub fn default_start() -> Waypoint {
    Waypoint::new("14-StandInit", Move::new(1.14).sets(true))
}

pub fn default_mandatory() -> Vec<Waypoint> {
    vec![
        Waypoint::new("WipeForehead", Move::new(4.6)),
        Waypoint::new("Hello", Move::new(4.38)),
        Waypoint::new("16-Sit", Move::new(17.0).sets(false)),
        Waypoint::new("17-SitRelax", Move::new(15.0).requires(false).sets(false)),
        Waypoint::new("11-Stand", Move::new(1.96)),
        Waypoint::new("15-StandZero", Move::new(1.9)),
    ]
}

pub fn default_end() -> Waypoint {
    Waypoint::new("6-Crouch", Move::new(2.46))
}

pub fn default_actuator_program() -> String {
    "python2".to_string()
}

pub fn default_actuator_args() -> Vec<String> {
    vec![
        "./NaoMoves/{move}.py".to_string(),
        "{ip}".to_string(),
        "{port}".to_string(),
    ]
}

pub fn default_robot_ip() -> String {
    "127.0.0.1".to_string()
}

pub fn default_robot_port() -> u16 {
    40237
}

pub fn default_move_timeout_sec() -> u64 {
    60
}

pub fn default_simulate_speed() -> f64 {
    1.0
}

pub fn default_player() -> PathBuf {
    PathBuf::from("cvlc")
}

pub fn default_song() -> PathBuf {
    PathBuf::from("Wii_Sports.mp3")
}
