// Library root
// -----------
// This crate exposes a small library surface for the uploader binary.
// The binary (`main.rs`) wires these modules together into one linear
// run: parse flags, read the source file, POST it, print what the
// service said.
//
// Module responsibilities:
// - `cli`: Turns the raw argument list into a plain `Args` struct.
// - `api`: Encapsulates the HTTP interaction with the address
//   generator service (payload construction and the single upload
//   call).
//
// Keeping this separation makes the encoding and request logic
// testable without spawning the binary.
pub mod api;
pub mod cli;
