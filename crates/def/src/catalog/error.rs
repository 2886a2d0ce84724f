use snafu::prelude::*;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display(r#"table "{}" already exists"#, name))]
    TableAlreadyExists { name: String },
}
