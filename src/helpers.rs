/// Returns early with the given error when the condition does not hold.
#[macro_export]
macro_rules! ensure {
    ($cond: expr, $err: expr) => {
        if !$cond {
            let err = $err;
            log::debug!("{} failed: {}", stringify!($cond), err);
            return Err(err.into());
        }
    };
}

#[macro_export]
macro_rules! dbg_display {
    ($e: expr) => {{
        let val = $e;
        log::debug!(
            "[{}/{}:{}] {} = {}",
            file!(),
            line!(),
            column!(),
            stringify!($e),
            val
        );
        val
    }};
}
