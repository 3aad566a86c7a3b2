//! Scene graph and hierarchical scene organization.
//!
//! The scene exists twice:
//!
//! - [`Node`] is the CPU description: a named transform with an optional mesh
//!   description and owned children. Builders in [`crate::court`] return
//!   populated `Node` trees; they are plain data and can be inspected in tests.
//! - [`SceneNode`] is the uploaded GPU tree ([`ContainerNode`] / [`ModelNode`]).
//!   [`to_scene_node`] walks a `Node` once, composes world transforms and bakes
//!   them into one-instance GPU buffers.

use wgpu::util::DeviceExt;

use crate::{
    data_structures::{
        geometry::Geometry,
        instance::Instance,
        model::{Material, Mesh},
    },
    render::{Instanced, Render},
};

/// Geometry plus the material it is drawn with.
#[derive(Clone, Debug)]
pub struct MeshDesc {
    pub geometry: Geometry,
    pub material: Material,
}

/// A node of the CPU scene description.
///
/// Children are owned, so a `Node` tree cannot contain cycles. The local
/// transform composes with the parent's: `world(child) = world(parent) * local(child)`.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub transform: Instance,
    pub mesh: Option<MeshDesc>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn group(name: &str) -> Self {
        Self {
            name: name.to_string(),
            transform: Instance::default(),
            mesh: None,
            children: Vec::new(),
        }
    }

    pub fn mesh(name: &str, geometry: Geometry, material: Material) -> Self {
        Self {
            mesh: Some(MeshDesc { geometry, material }),
            ..Self::group(name)
        }
    }

    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = cgmath::Vector3::new(x, y, z);
        self
    }

    pub fn with_rotation_x(mut self, angle: cgmath::Rad<f32>) -> Self {
        self.transform = self.transform.rotated_x(angle);
        self
    }

    pub fn with_scale(mut self, factor: f32) -> Self {
        self.transform = self.transform.scaled(factor);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.mesh.as_ref().map(|mesh| &mesh.geometry)
    }

    pub fn material(&self) -> Option<&Material> {
        self.mesh.as_ref().map(|mesh| &mesh.material)
    }

    /// Depth-first search for the first node called `name` (including `self`).
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Direct children whose name starts with `prefix`, in insertion order.
    pub fn children_named<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children
            .iter()
            .filter(move |child| child.name.starts_with(prefix))
    }

    /// Number of nodes in this subtree that carry a mesh.
    pub fn mesh_count(&self) -> usize {
        self.mesh.iter().count()
            + self
                .children
                .iter()
                .map(Node::mesh_count)
                .sum::<usize>()
    }

    /// World transform of the first node called `name`, with `self` as the root.
    pub fn world_transform_of(&self, name: &str) -> Option<Instance> {
        self.world_transform_from(&Instance::default(), name)
    }

    fn world_transform_from(&self, parent: &Instance, name: &str) -> Option<Instance> {
        let world = parent * &self.transform;
        if self.name == name {
            return Some(world);
        }
        self.children
            .iter()
            .find_map(|child| child.world_transform_from(&world, name))
    }
}

pub trait SceneNode {
    fn name(&self) -> &str;

    fn get_world_transform(&self) -> &Instance;

    fn get_children(&self) -> &Vec<Box<dyn SceneNode>>;

    fn add_child(&mut self, child: Box<dyn SceneNode>);

    fn get_render(&self) -> Vec<Instanced<'_>>;
}

impl<'a, 'pass> From<&'a dyn SceneNode> for Render<'a, 'pass> {
    /// Splits the subtree into opaque and transparent batches.
    fn from(sn: &'a dyn SceneNode) -> Self {
        let (transparent, opaque): (Vec<_>, Vec<_>) = sn
            .get_render()
            .into_iter()
            .partition(|instanced| instanced.mesh.transparent);
        Render::Composed(vec![
            Render::Defaults(opaque),
            Render::Transparents(transparent),
        ])
    }
}

/// A transform-only node grouping its children.
pub struct ContainerNode {
    name: String,
    pub children: Vec<Box<dyn SceneNode>>,
    world: Instance,
}

impl ContainerNode {
    pub fn new(name: &str, world: Instance) -> Self {
        Self {
            name: name.to_string(),
            children: vec![],
            world,
        }
    }
}

impl SceneNode for ContainerNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_world_transform(&self) -> &Instance {
        &self.world
    }

    fn get_children(&self) -> &Vec<Box<dyn SceneNode>> {
        &self.children
    }

    fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }

    fn get_render(&self) -> Vec<Instanced<'_>> {
        self.children
            .iter()
            .flat_map(|child| child.get_render())
            .collect()
    }
}

/// A node drawing one mesh at its baked world transform.
pub struct ModelNode {
    children: Vec<Box<dyn SceneNode>>,
    instance_buffer: wgpu::Buffer,
    world: Instance,
    mesh: Mesh,
}

impl ModelNode {
    pub fn new(device: &wgpu::Device, mesh: Mesh, world: Instance) -> Self {
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Instance Buffer", mesh.name)),
            contents: bytemuck::cast_slice(&[world.to_raw()]),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            children: vec![],
            instance_buffer,
            world,
            mesh,
        }
    }
}

impl SceneNode for ModelNode {
    fn name(&self) -> &str {
        &self.mesh.name
    }

    fn get_world_transform(&self) -> &Instance {
        &self.world
    }

    fn get_children(&self) -> &Vec<Box<dyn SceneNode>> {
        &self.children
    }

    fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }

    fn get_render(&self) -> Vec<Instanced<'_>> {
        self.children
            .iter()
            .flat_map(|child| child.get_render())
            .chain([Instanced {
                instance: &self.instance_buffer,
                mesh: &self.mesh,
                amount: 1,
            }])
            .collect()
    }
}

/// Uploads a scene description, returning the GPU tree rooted at `node`.
///
/// `parent_world` is the world transform of the node `node` is attached to.
pub fn to_scene_node(
    node: &Node,
    parent_world: &Instance,
    device: &wgpu::Device,
    material_layout: &wgpu::BindGroupLayout,
) -> Box<dyn SceneNode> {
    let world = parent_world * &node.transform;
    let mut scene_node: Box<dyn SceneNode> = match &node.mesh {
        Some(desc) => {
            let mesh = Mesh::new(
                device,
                material_layout,
                &node.name,
                &desc.geometry,
                &desc.material,
            );
            Box::new(ModelNode::new(device, mesh, world.clone()))
        }
        None => Box::new(ContainerNode::new(&node.name, world.clone())),
    };
    for child in &node.children {
        scene_node.add_child(to_scene_node(child, &world, device, material_layout));
    }
    scene_node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::{geometry, model::Material};

    fn tree() -> Node {
        Node::group("root").with_position(14.0, 0.0, 0.0).with_scale(0.5).with_child(
            Node::group("arm").with_position(-0.75, 10.0, 0.0).with_child(Node::mesh(
                "tip",
                geometry::cuboid(0.1, 0.1, 0.1),
                Material::phong(0xffffff),
            )),
        )
    }

    #[test]
    fn find_and_count() {
        let root = tree();
        assert!(root.find("tip").is_some());
        assert!(root.find("missing").is_none());
        assert_eq!(root.mesh_count(), 1);
        assert_eq!(root.children_named("ar").count(), 1);
    }

    #[test]
    fn world_transform_composes_down_the_path() {
        let world = tree().world_transform_of("tip").unwrap();
        assert!((world.position.x - 13.625).abs() < 1e-6);
        assert!((world.position.y - 5.0).abs() < 1e-6);
        assert_eq!(world.scale.x, 0.5);
    }
}
