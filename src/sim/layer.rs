//! Layers and the scene they make up
//!
//! A layer is a colored shape placed in the world. The scene holds every
//! layer in compositing order (first hit wins) plus the subset that moves.
//! Both lists are built once and never change shape afterwards.

use std::sync::Arc;

use super::shape::{Region, Shape, Vec2};
use crate::Color;
use crate::consts::*;

/// Index of a layer in [`Scene::layers`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub usize);

/// Index of an entry in [`Scene::moving`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovingId(pub usize);

/// A positioned, colored shape
///
/// `pos` is what the screen shows, `pos_next` is what physics has decided,
/// `pos_last` is the frame before `pos`.
#[derive(Debug, Clone)]
pub struct Layer {
    pub shape: Arc<Shape>,
    pub color: Color,
    pub pos: Vec2,
    pub pos_last: Vec2,
    pub pos_next: Vec2,
}

impl Layer {
    pub fn new(shape: Arc<Shape>, pos: Vec2, color: Color) -> Self {
        Self {
            shape,
            color,
            pos,
            pos_last: pos,
            pos_next: pos,
        }
    }

    /// Bounds at the committed position
    #[inline]
    pub fn bounds(&self) -> Region {
        self.shape.bounds(self.pos)
    }

    /// Whether the committed shape covers `pixel`
    #[inline]
    pub fn covers(&self, pixel: Vec2) -> bool {
        self.shape.contains(self.pos, pixel)
    }

    /// Forget any pending or previous motion
    pub fn init(&mut self) {
        self.pos_last = self.pos;
        self.pos_next = self.pos;
    }

    /// Promote the pending position to the visible one
    #[inline]
    pub fn commit(&mut self) {
        self.pos_last = self.pos;
        self.pos = self.pos_next;
    }
}

/// A layer that physics advances each tick
#[derive(Debug, Clone, Copy)]
pub struct MovingLayer {
    pub layer: LayerId,
    pub velocity: Vec2,
}

/// Every layer in the game, plus which ones move
#[derive(Debug, Clone)]
pub struct Scene {
    /// Compositing order, front to back
    pub layers: Vec<Layer>,
    /// Layers advanced by physics, in update order
    pub moving: Vec<MovingLayer>,
    pub ball: MovingId,
    pub top_paddle: MovingId,
    pub bottom_paddle: MovingId,
    pub field: LayerId,
}

impl Scene {
    /// Ball, two paddles and the playing field outline
    pub fn classic() -> Self {
        let paddle = Arc::new(Shape::filled_rect(PADDLE_HALF_SIZE.x, PADDLE_HALF_SIZE.y));
        let ball = Arc::new(Shape::circle(BALL_RADIUS));
        let outline = Arc::new(Shape::rect_outline(FIELD_HALF_SIZE.x, FIELD_HALF_SIZE.y));

        let layers = vec![
            Layer::new(ball, FIELD_CENTER, BALL_COLOR),
            Layer::new(Arc::clone(&paddle), BOTTOM_PADDLE_START, BOTTOM_PADDLE_COLOR),
            Layer::new(outline, FIELD_CENTER, FIELD_COLOR),
            Layer::new(paddle, TOP_PADDLE_START, TOP_PADDLE_COLOR),
        ];
        let moving = vec![
            MovingLayer {
                layer: LayerId(0),
                velocity: BALL_START_VELOCITY,
            },
            MovingLayer {
                layer: LayerId(1),
                velocity: Vec2::ZERO,
            },
            MovingLayer {
                layer: LayerId(3),
                velocity: Vec2::ZERO,
            },
        ];

        Self {
            layers,
            moving,
            ball: MovingId(0),
            bottom_paddle: MovingId(1),
            top_paddle: MovingId(2),
            field: LayerId(2),
        }
    }

    #[inline]
    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id.0]
    }

    #[inline]
    pub fn layer_mut(&mut self, id: LayerId) -> &mut Layer {
        &mut self.layers[id.0]
    }

    #[inline]
    pub fn mover(&self, id: MovingId) -> &MovingLayer {
        &self.moving[id.0]
    }

    #[inline]
    pub fn mover_mut(&mut self, id: MovingId) -> &mut MovingLayer {
        &mut self.moving[id.0]
    }

    /// The layer behind a moving entry
    pub fn moving_layer(&self, id: MovingId) -> &Layer {
        self.layer(self.mover(id).layer)
    }

    /// Split borrow: the moving entry and its layer
    pub fn moving_pair(&mut self, id: MovingId) -> (&mut MovingLayer, &mut Layer) {
        let mover = &mut self.moving[id.0];
        let layer = &mut self.layers[mover.layer.0];
        (mover, layer)
    }

    /// Reset `pos_last`/`pos_next` of every layer to its `pos`
    pub fn init_positions(&mut self) {
        for layer in &mut self.layers {
            layer.init();
        }
    }

    /// Fence the ball may travel in: the bounds of the field outline
    pub fn field_fence(&self) -> Region {
        self.layer(self.field).bounds()
    }

    /// Current bounds of a paddle
    pub fn paddle_bounds(&self, paddle: MovingId) -> Region {
        self.moving_layer(paddle).bounds()
    }
}
