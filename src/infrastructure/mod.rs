pub mod clipboard;
pub mod qris;
#[cfg(feature = "audio-rodio")]
pub mod rodio_sink;
pub mod telegram;
