use super::error::ObjError;
use super::types::{AttributeKind, FaceCorner};

/// Parses the first `N` numeric components following the directive.
/// Extra trailing components (`v x y z w`, `vt u v w`) are ignored.
pub fn parse_components<const N: usize>(parts: &[&str], label: &str) -> Result<[f32; N], String> {
    if parts.len() < N {
        return Err(format!(
            "{} requires {} components, found {}",
            label,
            N,
            parts.len()
        ));
    }

    let mut values = [0.0f32; N];
    for (slot, raw) in values.iter_mut().zip(parts) {
        let value = raw
            .parse::<f32>()
            .map_err(|error| format!("invalid {} component '{}': {}", label, raw, error))?;
        if !value.is_finite() {
            return Err(format!("non-finite {} component '{}'", label, raw));
        }
        *slot = value;
    }

    Ok(values)
}

/// Parses one `p`, `p/t`, `p/t/n` or `p//n` token against the counts parsed so far.
pub fn parse_face_corner(
    token: &str,
    line: usize,
    positions_len: usize,
    texcoords_len: usize,
    normals_len: usize,
) -> Result<FaceCorner, ObjError> {
    let malformed = |reason: &str| ObjError::MalformedFace {
        line,
        token: token.to_string(),
        reason: reason.to_string(),
    };

    let fields: Vec<&str> = token.split('/').collect();
    if fields.len() > 3 {
        return Err(malformed("expected at most 3 '/'-separated fields"));
    }

    if fields[0].is_empty() {
        return Err(malformed("missing position index"));
    }

    let position = parse_obj_index(fields[0], positions_len, line, token, AttributeKind::Position)?;

    let texcoord = match fields.get(1) {
        Some(raw) if !raw.is_empty() => Some(parse_obj_index(
            raw,
            texcoords_len,
            line,
            token,
            AttributeKind::TexCoord,
        )?),
        _ => None,
    };

    let normal = match fields.get(2) {
        Some(raw) if !raw.is_empty() => Some(parse_obj_index(
            raw,
            normals_len,
            line,
            token,
            AttributeKind::Normal,
        )?),
        _ => None,
    };

    Ok(FaceCorner {
        position,
        texcoord,
        normal,
    })
}

fn parse_obj_index(
    raw: &str,
    count: usize,
    line: usize,
    token: &str,
    kind: AttributeKind,
) -> Result<usize, ObjError> {
    let parsed = raw.parse::<i64>().map_err(|error| ObjError::MalformedFace {
        line,
        token: token.to_string(),
        reason: format!("invalid {} index '{}': {}", kind, raw, error),
    })?;

    if parsed == 0 {
        return Err(ObjError::MalformedFace {
            line,
            token: token.to_string(),
            reason: format!("{} index 0 is invalid, OBJ indices start at 1", kind),
        });
    }

    if parsed < 0 {
        return Err(ObjError::MalformedFace {
            line,
            token: token.to_string(),
            reason: format!("relative {} index {} is not supported", kind, parsed),
        });
    }

    if parsed as u64 > count as u64 {
        return Err(ObjError::IndexOutOfRange {
            line,
            kind,
            index: parsed,
            count,
        });
    }

    Ok(parsed as usize - 1)
}
