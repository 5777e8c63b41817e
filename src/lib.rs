//! Simulation of autonomous cars driving on a rectangular field.
//!
//! Cars execute their commands in lockstep, one command per car and step. Cars ending a step on
//! the same cell collide and stop.


pub mod controller;
pub mod domain;
pub mod report;
pub mod simulator;
