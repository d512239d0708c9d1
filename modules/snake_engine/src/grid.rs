/// 网格坐标，(0, 0) 为左上角
pub type Cell = (i32, i32);

/// 网格尺寸与坐标/索引转换工具
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// 行优先索引，调用方保证 `cell` 在界内
    pub fn to_index(&self, (x, y): Cell) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn from_index(&self, idx: usize) -> Cell {
        let w = self.width as usize;
        ((idx % w) as i32, (idx / w) as i32)
    }

    pub fn in_bounds(&self, (x, y): Cell) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }
}
