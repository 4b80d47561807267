// Adapters layer: concrete implementations for external systems. The
// browser session lives here; storage stays under src/config with the
// configuration it belongs to.

pub mod browser;
