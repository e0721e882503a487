pub mod images;

pub use images::FsImageStore;
