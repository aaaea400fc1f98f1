//! Textured triangle meshes.
//!
//! A [`Mesh`] owns its vertex positions, one UV per vertex, triangle index
//! triples and a rigid [`Transform`]. The texture is shared through an
//! `Arc` and never written to. Index and UV invariants are checked once, in
//! the constructors, so the renderer can index without further checks.

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::error::{Result, SceneError};
use crate::math::{Vec2, Vec3};
use crate::texture::Texture;
use crate::transform::Transform;

/// A triangle as three indices into the owning mesh's vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// Corner positions of a unit cube centred on the origin (scaled by half its size).
const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

const CUBE_UVS: [Vec2; 8] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
];

pub const CUBE_FACES: [Face; 12] = [
    // -Z
    Face::new(0, 1, 2),
    Face::new(0, 2, 3),
    // +Z
    Face::new(4, 6, 5),
    Face::new(4, 7, 6),
    // -Y
    Face::new(0, 4, 5),
    Face::new(0, 5, 1),
    // +Y
    Face::new(3, 2, 6),
    Face::new(3, 6, 7),
    // +X
    Face::new(1, 5, 6),
    Face::new(1, 6, 2),
    // -X
    Face::new(0, 3, 7),
    Face::new(0, 7, 4),
];

#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    uvs: Vec<Vec2>,
    faces: Vec<Face>,
    texture: Arc<Texture>,
    transform: Transform,
}

impl Mesh {
    /// Builds a mesh, rejecting mismatched UV counts and out-of-range indices.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        uvs: Vec<Vec2>,
        faces: Vec<Face>,
        texture: Arc<Texture>,
    ) -> Result<Self> {
        let name = name.into();
        if vertices.len() != uvs.len() {
            return Err(SceneError::InvalidGeometry(format!(
                "mesh '{name}' has {} vertices but {} UVs",
                vertices.len(),
                uvs.len()
            )));
        }
        for (i, face) in faces.iter().enumerate() {
            if let Some(&bad) = face.indices().iter().find(|&&idx| idx >= vertices.len()) {
                return Err(SceneError::InvalidGeometry(format!(
                    "mesh '{name}' triangle {i} references vertex {bad}, but only {} exist",
                    vertices.len()
                )));
            }
        }

        Ok(Self {
            name,
            vertices,
            uvs,
            faces,
            texture,
            transform: Transform::default(),
        })
    }

    /// The reference textured cube: 8 shared vertices, 12 triangles, edge length `size`.
    pub fn cube(size: f32, texture: Arc<Texture>) -> Self {
        let half = size / 2.0;
        Self {
            name: "cube".to_string(),
            vertices: CUBE_CORNERS.iter().map(|&c| c * half).collect(),
            uvs: CUBE_UVS.to_vec(),
            faces: CUBE_FACES.to_vec(),
            texture,
            transform: Transform::default(),
        }
    }

    /// Loads the first object of an OBJ file.
    pub fn from_obj<P: AsRef<Path>>(path: P, texture: Arc<Texture>) -> Result<Self> {
        let path = path.as_ref();
        Self::load_all_from_obj(path, texture)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                SceneError::InvalidGeometry(format!("{} contains no objects", path.display()))
            })
    }

    /// Loads every object/group of an OBJ file as a separate mesh sharing `texture`.
    ///
    /// Positions and texture coordinates are unified into one index stream, so
    /// each vertex carries exactly one UV. OBJ texture space has its origin at
    /// the bottom left; V is flipped here so that `v = 0` is the top image row.
    pub fn load_all_from_obj<P: AsRef<Path>>(path: P, texture: Arc<Texture>) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        };
        let (models, _materials) = tobj::load_obj(path, &options)?;

        let mut meshes = Vec::with_capacity(models.len());
        for model in models {
            let data = model.mesh;
            let vertices: Vec<Vec3> = data
                .positions
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2]))
                .collect();

            let uvs: Vec<Vec2> = if data.texcoords.is_empty() {
                warn!(
                    "OBJ object '{}' has no texture coordinates, using (0, 0)",
                    model.name
                );
                vec![Vec2::ZERO; vertices.len()]
            } else {
                data.texcoords
                    .chunks_exact(2)
                    .map(|t| Vec2::new(t[0], 1.0 - t[1]))
                    .collect()
            };

            let faces: Vec<Face> = data
                .indices
                .chunks_exact(3)
                .map(|f| Face::new(f[0] as usize, f[1] as usize, f[2] as usize))
                .collect();

            let mesh = Self::new(model.name, vertices, uvs, faces, Arc::clone(&texture))?;
            info!(
                "Loaded mesh '{}' from {} ({} vertices, {} triangles)",
                mesh.name,
                path.display(),
                mesh.vertices.len(),
                mesh.faces.len()
            );
            meshes.push(mesh);
        }
        Ok(meshes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Replaces the texture; geometry is untouched.
    pub fn set_texture(&mut self, texture: Arc<Texture>) {
        self.texture = texture;
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
