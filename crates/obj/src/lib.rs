//! Minimal Wavefront OBJ ingestion
//!
//! Parses the `v` and `f` records of an OBJ file into a single triangle
//! model. Face references may use any of the four index forms (`v`, `v/vt`,
//! `v//vn`, `v/vt/vn`); only the position index is kept. Polygonal faces are
//! fan-triangulated. Texture coordinates, normals, materials, groups, and
//! smoothing state are ignored.
//!
//! Single-mesh policy: only the first object (`o`) that contains faces is
//! used; faces belonging to later objects are dropped with a warning.

#[cfg(feature = "bevy")]
mod mesh;

/// A parsed single-object triangle model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjModel {
    pub positions: Vec<[f32; 3]>,
    pub faces: Vec<[u32; 3]>,
}

impl ObjModel {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Errors that can occur while reading an OBJ file
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("line {line}: malformed vertex record")]
    MalformedVertex { line: usize },
    #[error("line {line}: malformed face record")]
    MalformedFace { line: usize },
    #[error("line {line}: vertex index {index} out of range ({count} vertices defined)")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        count: usize,
    },
    #[error("model contains no faces")]
    EmptyModel,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read and parse an OBJ file from disk.
pub fn read_obj<P: AsRef<std::path::Path>>(path: P) -> Result<ObjModel, ObjError> {
    parse_obj(&std::fs::read_to_string(path)?)
}

/// Parse OBJ text into a triangle model.
pub fn parse_obj(src: &str) -> Result<ObjModel, ObjError> {
    let mut model = ObjModel::default();

    // Objects are numbered in encounter order; 0 is the implicit object
    // before any `o` record. Faces are only accepted from the object the
    // first face belonged to.
    let mut current_object = 0usize;
    let mut face_object: Option<usize> = None;
    let mut skipped_faces = 0usize;

    for (index, raw) in src.lines().enumerate() {
        let line = index + 1;
        let mut fields = raw.split_whitespace();
        match fields.next() {
            Some("v") => {
                let mut coord = || {
                    fields
                        .next()
                        .and_then(|s| s.parse::<f32>().ok())
                        .ok_or(ObjError::MalformedVertex { line })
                };
                model.positions.push([coord()?, coord()?, coord()?]);
            }
            Some("o") => {
                current_object += 1;
            }
            Some("f") => {
                if let Some(owner) = face_object {
                    if owner != current_object {
                        skipped_faces += 1;
                        continue;
                    }
                }

                let mut refs = Vec::new();
                for field in fields {
                    refs.push(parse_face_ref(field, line, model.positions.len())?);
                }
                if refs.len() < 3 {
                    return Err(ObjError::MalformedFace { line });
                }

                face_object = Some(current_object);
                for i in 1..refs.len() - 1 {
                    model.faces.push([refs[0], refs[i], refs[i + 1]]);
                }
            }
            // vt/vn/vp, mtllib/usemtl, g, s, and comments are all ignored.
            _ => {}
        }
    }

    if skipped_faces > 0 {
        tracing::warn!(
            "ignoring {} faces outside the model's first object",
            skipped_faces
        );
    }

    if model.faces.is_empty() {
        return Err(ObjError::EmptyModel);
    }
    Ok(model)
}

/// Parse one face reference (`7`, `7/1`, `7//3`, or `7/1/3`) into a
/// zero-based position index.
fn parse_face_ref(field: &str, line: usize, vertex_count: usize) -> Result<u32, ObjError> {
    let position = field
        .split('/')
        .next()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(ObjError::MalformedFace { line })?;

    // OBJ indices are 1-based; negative (relative) references are unsupported.
    if position < 1 || position as usize > vertex_count {
        return Err(ObjError::IndexOutOfRange {
            line,
            index: position,
            count: vertex_count,
        });
    }
    Ok((position - 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.5 1.0 0.0
f 1 2 3
";

    #[test]
    fn test_parse_triangle() {
        let model = parse_obj(TRIANGLE).unwrap();
        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_face_reference_forms() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
f 1 2/5 3//7 4/5/7
";
        let model = parse_obj(src).unwrap();
        // A quad fans into two triangles from the first reference.
        assert_eq!(model.faces, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_polygon_fan_triangulation() {
        let src = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0.5 1.5 0
v 0 1 0
f 1 2 3 4 5
";
        let model = parse_obj(src).unwrap();
        assert_eq!(model.faces, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }

    #[test]
    fn test_first_object_only() {
        let src = "\
o first
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o second
v 2 0 0
v 3 0 0
v 2 1 0
f 4 5 6
";
        let model = parse_obj(src).unwrap();
        // All vertices are kept (indices are file-global), but only the
        // first object's faces survive.
        assert_eq!(model.vertex_count(), 6);
        assert_eq!(model.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_leading_objects_without_faces_are_skipped_over() {
        let src = "\
o empty
o full
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";
        let model = parse_obj(src).unwrap();
        assert_eq!(model.face_count(), 1);
    }

    #[test]
    fn test_empty_model() {
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\n"),
            Err(ObjError::EmptyModel)
        ));
    }

    #[test]
    fn test_malformed_vertex() {
        assert!(matches!(
            parse_obj("v 0.0 zero\n"),
            Err(ObjError::MalformedVertex { line: 1 })
        ));
    }

    #[test]
    fn test_face_with_too_few_references() {
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n"),
            Err(ObjError::MalformedFace { line: 3 })
        ));
    }

    #[test]
    fn test_index_out_of_range() {
        assert!(matches!(
            parse_obj("v 0 0 0\nf 1 2 3\n"),
            Err(ObjError::IndexOutOfRange { line: 2, .. })
        ));
    }

    #[test]
    fn test_negative_indices_rejected() {
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n"),
            Err(ObjError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_ignored_records() {
        let src = "\
# comment
mtllib scene.mtl
v 0 0 0
v 1 0 0
v 0 1 0
vt 0.5 0.5
vn 0 0 1
usemtl shiny
s off
f 1 2 3
";
        let model = parse_obj(src).unwrap();
        assert_eq!(model.face_count(), 1);
    }
}
