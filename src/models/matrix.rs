/// State of one module while a symbol is under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet written by any pattern or data bit
    #[default]
    Unset,
    /// Light module
    Light,
    /// Dark module
    Dark,
}

impl Module {
    /// Module for a dark/light flag
    pub fn from_dark(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }

    /// Unset modules read as light
    pub fn is_dark(self) -> bool {
        self == Module::Dark
    }
}

/// Anything that can be read as a square grid of dark and light modules
pub trait ModuleGrid {
    /// Side length in modules
    fn module_count(&self) -> usize;

    /// Whether the module at (row, col) is dark
    fn is_dark(&self, row: usize, col: usize) -> bool;

    /// Number of dark modules
    fn dark_count(&self) -> usize {
        let n = self.module_count();
        (0..n)
            .map(|row| (0..n).filter(|&col| self.is_dark(row, col)).count())
            .sum()
    }
}

/// Square module matrix indexed by (row, col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<Module>,
}

impl ModuleMatrix {
    /// Create a matrix with every module unset
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![Module::Unset; size * size],
        }
    }

    /// Get matrix side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (row, col); out-of-range reads are unset
    pub fn get(&self, row: usize, col: usize) -> Module {
        if row >= self.size || col >= self.size {
            return Module::Unset;
        }
        self.modules[row * self.size + col]
    }

    /// Whether (row, col) has been written
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != Module::Unset
    }

    /// Set module at (row, col); out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row >= self.size || col >= self.size {
            return;
        }
        self.modules[row * self.size + col] = Module::from_dark(dark);
    }

    /// True once no module is left unset
    pub fn is_complete(&self) -> bool {
        !self.modules.contains(&Module::Unset)
    }

    /// Number of modules still unset
    pub fn unset_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m == Module::Unset).count()
    }

    /// Row-major dark/light flags
    pub fn to_bools(&self) -> Vec<bool> {
        self.modules.iter().map(|m| m.is_dark()).collect()
    }
}

impl Default for ModuleMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ModuleGrid for ModuleMatrix {
    fn module_count(&self) -> usize {
        self.size
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_dark()
    }
}
