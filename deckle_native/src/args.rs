use clap::builder::{StringValueParser, TypedValueParser};
use emath::Pos2;

/// Parses `XxY`, or a single number used for both coordinates
#[derive(Clone)]
pub struct PositionParser;

impl TypedValueParser for PositionParser {
    type Value = Pos2;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let parsed = StringValueParser::new().parse_ref(cmd, arg, value)?;
        parse_position(&parsed)
            .ok_or_else(|| clap::Error::new(clap::error::ErrorKind::InvalidValue).with_cmd(cmd))
    }
}

fn parse_position(text: &str) -> Option<Pos2> {
    let mut split = text.split('x');
    let x: f32 = split.next()?.trim().parse().ok()?;
    let y: f32 = match split.next() {
        Some(y) => y.trim().parse().ok()?,
        None => x,
    };
    if split.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Pos2::new(x, y))
}
