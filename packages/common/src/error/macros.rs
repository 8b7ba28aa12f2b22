//! Macros for error creation and handling

/// Create an error of the given kind with file/line context
#[macro_export]
macro_rules! err {
    ($kind:ident) => {
        $crate::error::Error::$kind().context(format!("at {}:{}", file!(), line!()))
    };
    ($kind:ident, $msg:expr) => {
        $crate::error::Error::$kind().context(format!("{} at {}:{}", $msg, file!(), line!()))
    };
    ($kind:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::Error::$kind().context(format!(concat!($fmt, " at {}:{}"), $($arg)*, file!(), line!()))
    };
}

/// Return early with an error built by [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}
