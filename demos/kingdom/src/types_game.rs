#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    Grass,
    // [code-gen] workers
    // [code-gen] end
}

impl Texture {
    pub fn path(&self) -> &'static str {
        match self {
            Texture::Grass => "grass.png",
            // [code-gen] worker_paths
            // [code-gen] end
        }
    }
}
