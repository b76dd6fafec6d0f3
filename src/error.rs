pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    EmptyCollection,
    Parse(String),
    Io(String),
    Internal(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "the list is empty"),
            Error::Parse(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "{}", e),
            Error::Internal(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

// 菜单选项或 push 的值不是整数
impl From<std::num::ParseIntError> for Error {
    fn from(value: std::num::ParseIntError) -> Self {
        Error::Parse(value.to_string())
    }
}

// 输出写入失败
impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}
