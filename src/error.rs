use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not encode image: {0}")]
    Image(#[from] ::image::ImageError),

    #[error("invalid options: {0}")]
    Options(#[from] getopts::Fail),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
