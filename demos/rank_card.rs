use easel::{
    Align, BarArgs, Canvas, Editor, EllipseArgs, Font, FontVariant, MultiTextArgs, RectangleArgs,
    TextArgs, TextRun,
};

struct Member {
    name: &'static str,
    xp: &'static str,
    next_level_xp: &'static str,
    level: u32,
    rank: u32,
    percentage: f64,
}

/// Avatar from the first CLI argument, or a flat placeholder.
fn avatar() -> anyhow::Result<Editor> {
    let editor = match std::env::args().nth(1) {
        Some(path) => Editor::new(std::path::PathBuf::from(path))?,
        None => Editor::new(Canvas::new(256, 256, "#7289da")?)?,
    };
    Ok(editor)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let member = Member {
        name: "Shahriyar#9770",
        xp: "1.2k",
        next_level_xp: "5k",
        level: 5,
        rank: 10,
        percentage: 45.0,
    };

    let font = match Font::system_sans(FontVariant::Regular, 30.0) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("rank_card: no usable system font ({e}), skipping");
            return Ok(());
        }
    };
    let accent = "#00fa81";

    let mut profile = avatar()?;
    profile.resize((190, 190), true)?.circle_image()?;

    let mut card = Editor::new(Canvas::new(934, 282, "#23272a")?)?;
    card.rectangle(RectangleArgs::new((20.0, 20.0), 894.0, 242.0).fill("#2a2e35"))?
        .paste(profile.surface(), (50.0, 50.0))?
        .ellipse(
            EllipseArgs::new((42.0, 42.0), 206.0, 206.0)
                .outline("#43b581")
                .stroke_width(10.0),
        )?
        .rectangle(
            RectangleArgs::new((260.0, 180.0), 630.0, 40.0)
                .fill("#484b4e")
                .radius(20.0),
        )?
        .bar(
            BarArgs::new((260.0, 180.0), 630.0, 40.0)
                .percentage(member.percentage)
                .fill(accent)
                .radius(20.0),
        )?
        .text(TextArgs::new((270.0, 120.0), member.name, &font).fill(accent))?
        .text(
            TextArgs::new(
                (870.0, 125.0),
                format!("{} / {}", member.xp, member.next_level_xp),
                &font,
            )
            .fill(accent)
            .align(Align::Right),
        )?
        .multi_text(
            MultiTextArgs::new(
                (850.0, 30.0),
                [
                    TextRun::new("Rank", &font).fill(accent),
                    TextRun::new(member.rank.to_string(), &font).fill("#1EAAFF"),
                    TextRun::new("  Level", &font).fill(accent),
                    TextRun::new(member.level.to_string(), &font).fill("#1EAAFF"),
                ],
            )
            .align(Align::Right),
        )?;

    let out = "rank_card.png";
    card.save(out)?;
    println!("wrote {out}");
    Ok(())
}
