use avian3d::prelude::*;
use bevy::color::palettes::css;
use bevy::ecs::system::{EntityCommands, SystemParam};
use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;

/// Where the pin and the ball come from.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub enum SceneAssetSource {
    /// Primitive meshes generated at startup.
    #[default]
    Procedural,
    /// A glTF file (relative to the asset folder) containing nodes named `"pin"` and `"ball"`.
    Gltf(String),
}

/// The 3D asset the placed objects are extracted from.
#[derive(Resource)]
pub enum SceneAsset {
    Gltf(Handle<Gltf>),
    Procedural(ProceduralBowlingSet),
}

impl SceneAsset {
    pub fn gltf(asset_server: &AssetServer, path: impl Into<String>) -> Self {
        let path: String = path.into();
        Self::Gltf(asset_server.load(path))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneAssetError {
    #[error("No scene asset was set up")]
    Missing,
    #[error("The scene asset is not loaded yet")]
    NotLoaded,
    #[error("The scene asset has no node named {0:?}")]
    MissingNode(String),
    #[error("The node {0:?} has no meshes")]
    NodeWithoutMesh(String),
}

/// A mesh (with its material) of an [`ObjectTemplate`], relative to the object's root.
#[derive(Debug, Clone)]
pub struct TemplatePart {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub transform: Transform,
}

#[derive(Debug, Clone)]
pub enum TemplateCollider {
    /// A single collider on the root of the object.
    Exact(Collider),
    /// A convex hull for every part, generated from its mesh.
    ConvexHullFromMeshes,
}

/// Everything needed to spawn a copy of a sub-node of the scene asset.
#[derive(Debug, Clone)]
pub struct ObjectTemplate {
    pub name: String,
    /// The node's own transform. Its translation is replaced when the object is placed.
    pub transform: Transform,
    pub parts: Vec<TemplatePart>,
    pub collider: TemplateCollider,
}

impl ObjectTemplate {
    /// Insert the parts (as children) and the collider of the template into an entity.
    ///
    /// `layers` go on every collider, including the ones generated for the parts.
    pub fn build_into(&self, cmd: &mut EntityCommands, layers: CollisionLayers) {
        cmd.insert((Name::new(self.name.clone()), layers));
        if let TemplateCollider::Exact(collider) = &self.collider {
            cmd.insert(collider.clone());
        }
        let with_hulls = matches!(self.collider, TemplateCollider::ConvexHullFromMeshes);
        cmd.with_children(|children| {
            for part in self.parts.iter() {
                let mut child = children.spawn((
                    Mesh3d(part.mesh.clone()),
                    MeshMaterial3d(part.material.clone()),
                    part.transform,
                ));
                if with_hulls {
                    child.insert((ColliderConstructor::ConvexHullFromMesh, layers));
                }
            }
        });
    }
}

/// Pin and ball made of primitive shapes, for when there is no glTF asset.
#[derive(Debug, Clone)]
pub struct ProceduralBowlingSet {
    pub pin: ObjectTemplate,
    pub ball: ObjectTemplate,
}

impl ProceduralBowlingSet {
    pub const PIN_RADIUS: f32 = 0.06;
    pub const PIN_HEIGHT: f32 = 0.38;
    pub const BALL_RADIUS: f32 = 0.11;

    pub fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            pin: ObjectTemplate {
                name: "pin".to_owned(),
                transform: Transform::IDENTITY,
                parts: vec![TemplatePart {
                    mesh: meshes.add(Cylinder::new(Self::PIN_RADIUS, Self::PIN_HEIGHT)),
                    material: materials.add(Color::from(css::WHITE_SMOKE)),
                    transform: Transform::IDENTITY,
                }],
                collider: TemplateCollider::Exact(Collider::cylinder(
                    Self::PIN_RADIUS,
                    Self::PIN_HEIGHT,
                )),
            },
            ball: ObjectTemplate {
                name: "ball".to_owned(),
                transform: Transform::IDENTITY,
                parts: vec![TemplatePart {
                    mesh: meshes.add(Sphere::new(Self::BALL_RADIUS)),
                    material: materials.add(StandardMaterial {
                        base_color: css::MIDNIGHT_BLUE.into(),
                        metallic: 0.2,
                        perceptual_roughness: 0.3,
                        ..Default::default()
                    }),
                    transform: Transform::IDENTITY,
                }],
                collider: TemplateCollider::Exact(Collider::sphere(Self::BALL_RADIUS)),
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&ObjectTemplate> {
        [&self.pin, &self.ball]
            .into_iter()
            .find(|template| template.name == name)
    }
}

pub(crate) fn ensure_scene_asset(
    existing: Option<Res<SceneAsset>>,
    source: Option<Res<SceneAssetSource>>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    if existing.is_some() {
        return;
    }
    let scene_asset = match source.as_deref() {
        Some(SceneAssetSource::Gltf(path)) => {
            info!("Loading bowling objects from {path:?}");
            SceneAsset::gltf(&asset_server, path.clone())
        }
        Some(SceneAssetSource::Procedural) | None => {
            info!("Using procedural bowling objects");
            SceneAsset::Procedural(ProceduralBowlingSet::new(&mut meshes, &mut materials))
        }
    };
    commands.insert_resource(scene_asset);
}

/// Finds sub-nodes of the [`SceneAsset`] by name.
#[derive(SystemParam)]
pub struct SceneAssetLookup<'w> {
    scene_asset: Option<Res<'w, SceneAsset>>,
    gltfs: Res<'w, Assets<Gltf>>,
    gltf_nodes: Res<'w, Assets<GltfNode>>,
    gltf_meshes: Res<'w, Assets<GltfMesh>>,
}

impl SceneAssetLookup<'_> {
    /// Find a node by name anywhere in the scene asset.
    pub fn child_node_named(&self, name: &str) -> Result<ObjectTemplate, SceneAssetError> {
        let scene_asset = self.scene_asset.as_deref().ok_or(SceneAssetError::Missing)?;
        match scene_asset {
            SceneAsset::Procedural(set) => set
                .get(name)
                .cloned()
                .ok_or_else(|| SceneAssetError::MissingNode(name.to_owned())),
            SceneAsset::Gltf(handle) => {
                let gltf = self.gltfs.get(handle).ok_or(SceneAssetError::NotLoaded)?;
                let node = gltf
                    .named_nodes
                    .get(name)
                    .and_then(|node_handle| self.gltf_nodes.get(node_handle))
                    .ok_or_else(|| SceneAssetError::MissingNode(name.to_owned()))?;

                let mut parts = Vec::new();
                self.collect_parts(node, Transform::IDENTITY, &mut parts);
                if parts.is_empty() {
                    return Err(SceneAssetError::NodeWithoutMesh(name.to_owned()));
                }
                Ok(ObjectTemplate {
                    name: name.to_owned(),
                    transform: node.transform,
                    parts,
                    collider: TemplateCollider::ConvexHullFromMeshes,
                })
            }
        }
    }

    fn collect_parts(&self, node: &GltfNode, relative: Transform, parts: &mut Vec<TemplatePart>) {
        if let Some(gltf_mesh) = node
            .mesh
            .as_ref()
            .and_then(|mesh_handle| self.gltf_meshes.get(mesh_handle))
        {
            for primitive in gltf_mesh.primitives.iter() {
                parts.push(TemplatePart {
                    mesh: primitive.mesh.clone(),
                    material: primitive.material.clone().unwrap_or_default(),
                    transform: relative,
                });
            }
        }
        for child in node
            .children
            .iter()
            .filter_map(|child_handle| self.gltf_nodes.get(child_handle))
        {
            self.collect_parts(child, relative * child.transform, parts);
        }
    }
}
