//! Response definitions
//!
//! Represents replies received from the server.

/// Separator between the status code and the text of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `-`: more lines follow
    Continuation,

    /// ` `: last line of the frame
    Final,
}

impl Separator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Separator::Continuation),
            ' ' => Some(Separator::Final),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Separator::Continuation => '-',
            Separator::Final => ' ',
        }
    }
}

/// One line of a response frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseLine {
    /// Status code
    pub code: u16,

    pub separator: Separator,

    /// Everything after the separator
    pub text: String,
}

impl ResponseLine {
    pub fn is_final(&self) -> bool {
        self.separator == Separator::Final
    }
}

/// Hundreds digit of a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusClass(pub u16);

impl StatusClass {
    pub fn from_code(code: u16) -> Self {
        StatusClass(code / 100)
    }

    pub fn is_success(self) -> bool {
        self.0 == 2
    }
}

/// A decoded response frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code shared by every line of the frame
    pub code: u16,

    /// Text of the final line
    pub message: String,

    /// Text of each continuation line, in arrival order
    pub data: Vec<String>,
}

impl Response {
    pub fn new(code: u16, message: impl Into<String>, data: Vec<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    pub fn status_class(&self) -> StatusClass {
        StatusClass::from_code(self.code)
    }

    /// Returns `true` for a 2xx code
    pub fn is_success(&self) -> bool {
        self.status_class().is_success()
    }
}
