//! Exit handling: signal handlers and terminal restore.

/// Put the tty back in cooked mode with echo.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit. Runs on every normal exit, including `process::exit`.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    unsafe {
        // Skip escape codes when piping passwords
        if libc::isatty(1) == 1 {
            let reset = b"\x1b[0m\x1b[?25h";
            libc::write(1, reset.as_ptr() as *const libc::c_void, reset.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit through libc so the atexit hook fires.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers, the atexit hook, and keep passwords out of core dumps.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
    disable_core_dumps();
}

#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}

/// Reset terminal state before drawing.
pub fn reset_terminal() {
    restore_termios();
}
