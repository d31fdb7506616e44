// View controllers
//
// One state struct per top-level screen. Controllers own their data, their
// loading flags, and the pure decision logic (filtering, validation,
// authorization gates); the TUI layer translates keys into calls on them and
// the app event handler feeds request results back in.

pub mod admin;
pub mod articles;
pub mod reader;
