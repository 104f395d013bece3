//! Formlens - WinForms Designer file inspector
//!
//! Formlens is a CLI tool and library for recovering a structured control
//! model from the `InitializeComponent` method that the Windows Forms visual
//! designer generates into `*.Designer.cs` files. It extracts the form class
//! name, every instantiated control, property assignments, event-handler
//! wiring, and parent/panel placement.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `extract`: Core extraction engine (statement classification pipeline)
//! - `model`: Control model value types (`FileModel`, `ControlInfo`)
//! - `report`: Terminal rendering of extracted models
//! - `scaffold`: New Designer file template generation
//! - `syntax`: C# syntax tree boundary (tree-sitter wrapper)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod extract;
pub mod model;
pub mod report;
pub mod scaffold;
pub mod syntax;
pub mod utils;
