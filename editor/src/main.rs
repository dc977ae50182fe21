use clap::{Arg, ArgMatches};
use itertools::Itertools;
use nalgebra_glm::{DVec2, DVec3};

use editor::{
    camera::Camera,
    session::{Command, Session},
    text,
    viewport::PlanarView,
};
use nurbs::NurbsCurve;

fn run(matches: &ArgMatches) -> editor::Result<()> {
    let seed = matches.value_of("seed").unwrap_or("quarter");
    let (curve, resolution) = match seed {
        "cubic" => (NurbsCurve::cubic(), 200),
        "spatial" => (NurbsCurve::spatial(), 100),
        _ => (NurbsCurve::quarter_circle(), 200),
    };
    let spatial = seed == "spatial";

    let mut session = Session::new(curve, resolution);
    let events = session.subscribe();

    if let Some(d) = matches.value_of("degree") {
        session.apply(Command::SetDegree(text::parse_count(d)?))?;
    }
    if let Some(k) = matches.value_of("knots") {
        session.apply(Command::ApplyKnots(k.to_owned()))?;
    }
    for u in matches.values_of("insert").into_iter().flatten() {
        session.apply(Command::InsertKnot(u.to_owned()))?;
    }
    for i in matches.values_of("remove").into_iter().flatten() {
        session.apply(Command::RemovePoint(text::parse_count(i)?))?;
    }
    if let Some(n) = matches.value_of("samples") {
        session.apply(Command::SetResolution(text::parse_count(n)?))?;
    }
    for e in events.try_iter() {
        log::info!("{:?}", e);
    }

    let width = text::parse_number(matches.value_of("width").unwrap_or("800"))?;
    let height = text::parse_number(matches.value_of("height").unwrap_or("600"))?;

    // Either the orbit camera or the flat pan/zoom view maps model space to
    // pixels, depending on the seed.
    let to_screen: Box<dyn Fn(&DVec3) -> DVec2> = if spatial {
        let mut camera = Camera::default();
        camera.set_size(width, height);
        if let Some(mut d) = matches.values_of("orbit") {
            let dx = text::parse_number(d.next().unwrap_or("0"))?;
            let dy = text::parse_number(d.next().unwrap_or("0"))?;
            camera.orbit(dx, dy);
        }
        if let Some(z) = matches.value_of("zoom") {
            camera.zoom(text::parse_number(z)?);
        }
        Box::new(move |p: &DVec3| camera.project(p, width, height))
    } else {
        let mut view = PlanarView::default();
        if let Some(mut d) = matches.values_of("pan") {
            let dx = text::parse_number(d.next().unwrap_or("0"))?;
            let dy = text::parse_number(d.next().unwrap_or("0"))?;
            view.pan_by(dx, dy);
        }
        Box::new(move |p: &DVec3| view.to_screen(p.xy()))
    };

    let curve = session.curve();
    println!("Knot Vector: {}", text::format_knots(curve.knots()));
    println!("Control Polygon:\n{}", text::format_polygon(curve.control_points()));

    println!("Polygon edges:");
    for (a, b) in curve
        .control_points()
        .iter()
        .map(|cp| to_screen(&cp.position()))
        .tuple_windows()
    {
        println!("{:.2} {:.2} -> {:.2} {:.2}", a.x, a.y, b.x, b.y);
    }

    println!("Curve ({} segments):", session.resolution());
    for p in session.polyline() {
        let s = to_screen(&p);
        println!("{:.2} {:.2}", s.x, s.y);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = clap::Command::new("editor")
        .about("Edits a NURBS curve and prints what its viewport would draw")
        .arg(
            Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .possible_values(["quarter", "cubic", "spatial"])
                .default_value("quarter"),
        )
        .arg(Arg::new("degree").long("degree").takes_value(true))
        .arg(
            Arg::new("knots")
                .long("knots")
                .takes_value(true)
                .help("Comma separated knot vector"),
        )
        .arg(
            Arg::new("insert")
                .long("insert")
                .takes_value(true)
                .multiple_occurrences(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("remove")
                .long("remove")
                .takes_value(true)
                .multiple_occurrences(true),
        )
        .arg(Arg::new("samples").long("samples").takes_value(true))
        .arg(
            Arg::new("orbit")
                .long("orbit")
                .number_of_values(2)
                .value_names(&["DX", "DY"])
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("zoom")
                .long("zoom")
                .takes_value(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("pan")
                .long("pan")
                .number_of_values(2)
                .value_names(&["DX", "DY"])
                .allow_hyphen_values(true),
        )
        .arg(Arg::new("width").long("width").takes_value(true).default_value("800"))
        .arg(Arg::new("height").long("height").takes_value(true).default_value("600"))
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
