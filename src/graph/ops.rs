use crate::{
    graph::node::{min_size, Expression},
    math::Numeric,
};

/*
Operator Nodes
==============

Each node owns its input expression(s) by value and applies one elementwise
operation on read. Nothing is cached: reading the same index twice recomputes
it, and two reads of the same index always agree.

    node       read(i)                   size
    --------   -----------------------   ----------------------
    Scale      a[i] * factor             size(a)
    Offset     a[i] + amount             size(a)
    Product    a[i] * b[i]               shorter of a and b
    Sqr        a[i] * a[i]               size(a)
    Sin        sin(a[i])                 size(a)

`Sin` is the accurate, lane-wise libm sine, not the polynomial used by the
periodic waveforms. The test signals are built from it.

Nodes compose through the fluent helpers in `extensions`:

    linspace(0.0, n, len, false).sqr().scale(FRAC_PI_2 / n).sin()
*/

/// Multiply every element by a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale<E: Expression> {
    input: E,
    factor: E::Item,
}

impl<E: Expression> Scale<E> {
    pub fn new(input: E, factor: E::Item) -> Self {
        Self { input, factor }
    }
}

impl<E: Expression> Expression for Scale<E> {
    type Item = E::Item;

    fn size(&self) -> Option<usize> {
        self.input.size()
    }

    #[inline]
    fn read<V: Numeric<Scalar = E::Item>>(&self, index: usize) -> V {
        self.input.read::<V>(index) * V::splat(self.factor)
    }
}

/// Add a constant to every element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset<E: Expression> {
    input: E,
    amount: E::Item,
}

impl<E: Expression> Offset<E> {
    pub fn new(input: E, amount: E::Item) -> Self {
        Self { input, amount }
    }
}

impl<E: Expression> Expression for Offset<E> {
    type Item = E::Item;

    fn size(&self) -> Option<usize> {
        self.input.size()
    }

    #[inline]
    fn read<V: Numeric<Scalar = E::Item>>(&self, index: usize) -> V {
        self.input.read::<V>(index) + V::splat(self.amount)
    }
}

/// Elementwise product of two expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product<A, B> {
    left: A,
    right: B,
}

impl<A, B> Product<A, B>
where
    A: Expression,
    B: Expression<Item = A::Item>,
{
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A, B> Expression for Product<A, B>
where
    A: Expression,
    B: Expression<Item = A::Item>,
{
    type Item = A::Item;

    fn size(&self) -> Option<usize> {
        min_size(self.left.size(), self.right.size())
    }

    #[inline]
    fn read<V: Numeric<Scalar = A::Item>>(&self, index: usize) -> V {
        self.left.read::<V>(index) * self.right.read::<V>(index)
    }
}

/// Square every element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sqr<E> {
    input: E,
}

impl<E: Expression> Sqr<E> {
    pub fn new(input: E) -> Self {
        Self { input }
    }
}

impl<E: Expression> Expression for Sqr<E> {
    type Item = E::Item;

    fn size(&self) -> Option<usize> {
        self.input.size()
    }

    #[inline]
    fn read<V: Numeric<Scalar = E::Item>>(&self, index: usize) -> V {
        self.input.read::<V>(index).sqr()
    }
}

/// Accurate sine (radians) of every element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sin<E> {
    input: E,
}

impl<E: Expression> Sin<E> {
    pub fn new(input: E) -> Self {
        Self { input }
    }
}

impl<E: Expression> Expression for Sin<E> {
    type Item = E::Item;

    fn size(&self) -> Option<usize> {
        self.input.size()
    }

    #[inline]
    fn read<V: Numeric<Scalar = E::Item>>(&self, index: usize) -> V {
        self.input.read::<V>(index).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{collect, constant, input, linspace, ExprExt};

    #[test]
    fn scale_and_offset_apply_per_element() {
        let ramp = linspace(0.0f64, 4.0, 4, false);
        assert_eq!(collect(&ramp.scale(2.0), 4), vec![0.0, 2.0, 4.0, 6.0]);
        assert_eq!(collect(&ramp.offset(-1.0), 4), vec![-1.0, 0.0, 1.0, 2.0]);
        assert_eq!(collect(&ramp.sqr(), 4), vec![0.0, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn product_takes_shorter_size() {
        let a = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0f32, 2.0, 2.0];
        let p = input(&a).product(input(&b));
        assert_eq!(p.size(), Some(3));
        assert_eq!(collect(&p, 3), vec![2.0, 4.0, 6.0]);

        let unbounded = input(&a).product(constant(0.5));
        assert_eq!(unbounded.size(), Some(5));
        assert_eq!(constant(1.0f32).product(constant(2.0)).size(), None);
    }

    #[test]
    fn sin_is_the_accurate_sine() {
        let ramp = linspace(-4.0f64, 4.0, 37, true);
        let expected: Vec<f64> = collect(&ramp, 37).into_iter().map(f64::sin).collect();
        assert_eq!(collect(&ramp.sin(), 37), expected);
    }

    #[test]
    fn nodes_can_share_a_borrowed_input() {
        let ramp = linspace(0.0f64, 1.0, 8, false);
        let doubled = (&ramp).scale(2.0);
        let squared = (&ramp).sqr();
        assert_eq!(doubled.size(), squared.size());
        assert_eq!(collect(&ramp, 8).len(), 8);
    }
}
