use crspline::animate::DEFAULT_DURATION_MS;
use crspline::draw::svg::SvgSurface;
use crspline::{Point, Session};

/// Scripted version of the interactive flow: a few clicks, a commit and a
/// synthetic frame clock driving the animation halfway, then the scene is
/// printed as svg with the tracer mid-curve.
fn main() -> Result<(), crspline::Error> {
    tracing_subscriber::fmt::init();

    let mut surface = SvgSurface::new(800.0, 600.0);
    let mut session = Session::new(800.0, 600.0);

    for point in [
        Point::new(100.0, 500.0),
        Point::new(250.0, 150.0),
        Point::new(420.0, 450.0),
        Point::new(600.0, 100.0),
        Point::new(700.0, 350.0),
    ] {
        session.place(point, &mut surface);
    }
    session.commit(&mut surface);

    let mut ts = 0.0;
    while ts <= DEFAULT_DURATION_MS / 2.0 && session.tick(ts, &mut surface)? {
        ts += 250.0;
    }

    println!("{}", surface);
    Ok(())
}
