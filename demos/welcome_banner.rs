use easel::{
    Align, Canvas, Color, EllipseArgs, Font, FontVariant, ImageSource, InstructionQueue, Op,
    PasteArgs, QueueOpts, TextArgs, Workspace,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let fonts = (
        Font::system_sans(FontVariant::Bold, 50.0),
        Font::system_sans(FontVariant::Regular, 30.0),
        Font::system_sans(FontVariant::Light, 18.0),
    );
    let (Ok(big), Ok(regular), Ok(thin)) = fonts else {
        eprintln!("welcome_banner: no usable system font, skipping");
        return Ok(());
    };
    let medium = big.with_size(40.0)?;

    // Decorations are prepared off-thread while the layout is assembled.
    let opts = QueueOpts::from_env();
    let square = InstructionQueue::with_opts(Canvas::new(400, 500, "#2C2F33")?, opts)?
        .rotate(15.0, true)
        .execute();
    let avatar_source = match std::env::args().nth(1) {
        Some(path) => ImageSource::from(std::path::PathBuf::from(path)),
        None => ImageSource::from(Canvas::new(256, 256, "#f04747")?),
    };
    let avatar = InstructionQueue::with_opts(avatar_source, opts)?
        .resize((200, 200), true)
        .circle_image()
        .execute();

    let square = pollster::block_on(square)?;
    let avatar = pollster::block_on(avatar)?;

    let mut ws = Workspace::new(900, 270)?;
    ws.create_layer("background", "#23272a")?;
    ws.create_layer("decor", Color::TRANSPARENT)?;
    ws.create_layer("text", Color::TRANSPARENT)?;

    ws.set_working_layer("decor")?;
    ws.add_component(
        None,
        Some("square"),
        Op::from(PasteArgs::new(square.into_surface(), (-150.0, -100.0))),
    )?;
    ws.add_component(
        None,
        Some("avatar"),
        Op::from(PasteArgs::new(avatar.into_surface(), (40.0, 35.0))),
    )?;
    ws.add_component(
        None,
        Some("avatar_ring"),
        Op::from(
            EllipseArgs::new((40.0, 35.0), 200.0, 200.0)
                .outline("white")
                .stroke_width(3.0),
        ),
    )?;

    ws.set_working_layer("text")?;
    let lines = [
        ((600.0, 20.0), "WELCOME", &big),
        ((600.0, 70.0), "Shahriyar#9770", &regular),
        ((600.0, 120.0), "YOU ARE MEMBER", &medium),
        ((600.0, 160.0), "GUILD 4359", &regular),
        (
            (620.0, 245.0),
            "THANK YOU FOR JOINING. HOPE YOU WILL ENJOY YOUR STAY",
            &thin,
        ),
    ];
    for (position, text, font) in lines {
        ws.add_component(
            None,
            None,
            Op::from(
                TextArgs::new(position, text, font)
                    .fill("white")
                    .align(Align::Center),
            ),
        )?;
    }

    let out = "welcome_banner.png";
    ws.generate()?.save(out)?;
    println!("wrote {out}");
    Ok(())
}
