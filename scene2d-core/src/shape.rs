/// Parser for the plain-text 2D shape format
///
/// ```text
/// shape box
/// v -1.0 -1.0
/// v  1.0 -1.0
/// v  1.0  1.0
/// e 0 1
/// e 1 2
/// endshape
/// ```
///
/// Vertices get their homogeneous coordinate appended on load; edge indices
/// are zero-based vertex references, validated later by object
/// construction.
use nalgebra::DMatrix;
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, multispace1, not_line_ending, u64 as index},
    multi::many0,
    number::complete::double,
    sequence::preceded,
    IResult,
};

/// Geometry loaded from a shape description.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeData {
    pub name: String,
    pub vertices: DMatrix<f64>,
    pub edges: DMatrix<usize>,
}

/// Parse a shape description.
pub fn parse_shape(input: &str) -> Result<ShapeData, String> {
    match parse_shape_impl(input) {
        Ok((_, shape)) => Ok(shape),
        Err(e) => Err(format!("Failed to parse shape: {:?}", e)),
    }
}

fn parse_shape_impl(input: &str) -> IResult<&str, ShapeData> {
    let (input, _) = preceded(multispace0, tag("shape"))(input)?;
    let (input, name) = not_line_ending(input)?;
    let (input, vertices) = many0(parse_vertex)(input)?;
    let (input, edges) = many0(parse_edge)(input)?;
    let (input, _) = preceded(multispace0, tag("endshape"))(input)?;

    let mut vertex_rows = Vec::with_capacity(vertices.len() * 3);
    for (x, y) in &vertices {
        vertex_rows.extend_from_slice(&[*x, *y, 1.0]);
    }
    let mut edge_rows = Vec::with_capacity(edges.len() * 2);
    for (i, j) in &edges {
        edge_rows.extend_from_slice(&[*i, *j]);
    }

    Ok((
        input,
        ShapeData {
            name: name.trim().to_string(),
            vertices: DMatrix::from_row_slice(vertices.len(), 3, &vertex_rows),
            edges: DMatrix::from_row_slice(edges.len(), 2, &edge_rows),
        },
    ))
}

fn parse_vertex(input: &str) -> IResult<&str, (f64, f64)> {
    let (input, _) = preceded(multispace0, tag("v"))(input)?;
    let (input, _) = multispace1(input)?;
    let (input, x) = double(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = double(input)?;
    Ok((input, (x, y)))
}

fn parse_edge(input: &str) -> IResult<&str, (usize, usize)> {
    let (input, _) = preceded(multispace0, tag("e"))(input)?;
    let (input, _) = multispace1(input)?;
    let (input, i) = index(input)?;
    let (input, _) = multispace1(input)?;
    let (input, j) = index(input)?;
    Ok((input, (i as usize, j as usize)))
}
