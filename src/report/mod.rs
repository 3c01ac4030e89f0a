pub mod console;
pub mod fingerprint;
pub mod html;
